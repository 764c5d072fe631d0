//! DOM element bindings.
//!
//! All page elements are resolved once at startup into an `Elements`
//! struct (the catalog page) or `LoginElements` (the login page).
//! To add new UI elements, add a field here and bind it in `bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Show/hide via the inline style, matching the page CSS defaults.
pub fn set_displayed(el: &HtmlElement, displayed: bool) {
    let style = el.style();
    if displayed {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", "none");
    }
}

pub fn document() -> Document {
    doc()
}

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

// ── Elements structs ──

/// All DOM references used by the catalog page (`/home`).
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Toolbar
    pub create_catalog_btn: HtmlElement,
    pub search_input: HtmlInputElement,
    pub status_filter: HtmlSelectElement,
    pub logout_btn: HtmlElement,
    pub welcome_user: HtmlElement,

    // Listing
    pub catalog_table_body: Element,
    pub no_catalogs_message: HtmlElement,
    pub message_container: Element,
    pub loading_spinner: Element,

    // Pagination
    pub prev_page_btn: HtmlButtonElement,
    pub next_page_btn: HtmlButtonElement,
    pub page_info: Element,

    // Catalog editor modal
    pub catalog_modal: Element,
    pub catalog_modal_title: Element,
    pub close_modal_btn: HtmlElement,
    pub catalog_form: HtmlFormElement,
    pub submit_catalog_btn: HtmlElement,
    pub catalog_id: HtmlInputElement,
    pub catalog_name: HtmlInputElement,
    pub catalog_description: HtmlInputElement,
    pub start_date: HtmlInputElement,
    pub end_date: HtmlInputElement,
    pub status: HtmlSelectElement,
    pub catalog_name_error: Element,
    pub catalog_description_error: Element,
    pub start_date_error: Element,
    pub end_date_error: Element,
    pub status_error: Element,

    // Delete confirmation modal
    pub confirm_modal: Element,
    pub close_confirm_modal_btn: HtmlElement,
    pub confirm_delete_btn: HtmlElement,
    pub cancel_delete_btn: HtmlElement,
    pub confirm_message: Element,
}

/// DOM references used by the login page.
#[derive(Clone)]
pub struct LoginElements {
    pub login_form: HtmlFormElement,
    pub username_or_email: HtmlInputElement,
    pub password: HtmlInputElement,
    pub login_error: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_button {
    ($id:expr) => {
        by_id_typed::<HtmlButtonElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing button #{}", $id)))?
    };
}

macro_rules! get_form {
    ($id:expr) => {
        by_id_typed::<HtmlFormElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing form #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all catalog-page references. Call once after load.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            create_catalog_btn: get_html!("createCatalogBtn"),
            search_input: get_input!("searchInput"),
            status_filter: get_select!("statusFilter"),
            logout_btn: get_html!("logoutBtn"),
            welcome_user: get_html!("welcomeUser"),

            catalog_table_body: get_el!("catalogTableBody"),
            no_catalogs_message: get_html!("noCatalogsMessage"),
            message_container: get_el!("message-container"),
            loading_spinner: get_el!("loadingSpinner"),

            prev_page_btn: get_button!("prevPageBtn"),
            next_page_btn: get_button!("nextPageBtn"),
            page_info: get_el!("pageInfo"),

            catalog_modal: get_el!("catalogModal"),
            catalog_modal_title: get_el!("catalogModalTitle"),
            close_modal_btn: get_html!("closeModalBtn"),
            catalog_form: get_form!("catalogForm"),
            submit_catalog_btn: get_html!("submitCatalogBtn"),
            catalog_id: get_input!("catalogId"),
            catalog_name: get_input!("catalogName"),
            catalog_description: get_input!("catalogDescription"),
            start_date: get_input!("startDate"),
            end_date: get_input!("endDate"),
            status: get_select!("status"),
            catalog_name_error: get_el!("catalogNameError"),
            catalog_description_error: get_el!("catalogDescriptionError"),
            start_date_error: get_el!("startDateError"),
            end_date_error: get_el!("endDateError"),
            status_error: get_el!("statusError"),

            confirm_modal: get_el!("confirmModal"),
            close_confirm_modal_btn: get_html!("closeConfirmModalBtn"),
            confirm_delete_btn: get_html!("confirmDeleteBtn"),
            cancel_delete_btn: get_html!("cancelDeleteBtn"),
            confirm_message: get_el!("confirmMessage"),
        })
    }
}

impl LoginElements {
    /// Resolve the login form, or `None` when this page has none.
    pub fn bind() -> Option<LoginElements> {
        Some(LoginElements {
            login_form: by_id_typed::<HtmlFormElement>("loginForm")?,
            username_or_email: by_id_typed::<HtmlInputElement>("usernameOrEmail")?,
            password: by_id_typed::<HtmlInputElement>("password")?,
            login_error: by_id("loginError")?,
        })
    }
}
