//! Browser binding: resolves the page markup, seeds [`PageCore`] from it, and
//! installs the event listeners that drive it.
//!
//! ARCHITECTURE
//! ============
//! `PageBinding` owns every listener closure it installs. The closures share
//! the core and the resolved elements through an `Rc<Bound>`; `Bound` never
//! points back at the listeners, so dropping the binding removes the
//! listeners and frees everything. The active binding lives in a thread-local
//! slot so the exported `openForm`/`closeForm` can reach it. Rebinding drops
//! the previous binding first, so listeners never accumulate.
//!
//! Outside clicks are handled by ONE document listener that walks all link
//! items.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Node, Window};

use crate::config::{PageConfig, TaskPairing};
use crate::consts::CONFIG_ATTRIBUTE;
use crate::engine::{Action, PageCore};
use crate::error::{PageError, RowKind};
use crate::event::{ClickTarget, PageEvent};
use crate::page::{LinkItem, PageState, Popup, TaskItem, Visibility};
use crate::pairing::{ChildLookup, pair_by_position, pair_within_rows};

thread_local! {
    static BINDING: RefCell<Option<PageBinding>> = const { RefCell::new(None) };
}

fn js_error(err: JsValue) -> PageError {
    PageError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl ChildLookup for Element {
    type Child = Element;

    fn find(&self, selector: &str) -> Result<Option<Element>, PageError> {
        self.query_selector(selector).map_err(js_error)
    }
}

// ── Element resolution ──────────────────────────────────────────

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn html(element: Element, selector: &str) -> Result<HtmlElement, PageError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::Dom(format!("{selector} did not match an HTML element")))
}

fn checkbox(element: Element, selector: &str) -> Result<HtmlInputElement, PageError> {
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| PageError::Dom(format!("{selector} did not match an input element")))
}

/// Rendered visibility: the computed `display`, falling back to the inline
/// style when the element has no computed style.
fn display_of(window: &Window, element: &HtmlElement) -> Result<Visibility, PageError> {
    let style = match window.get_computed_style(element).map_err(js_error)? {
        Some(computed) => computed,
        None => element.style(),
    };
    let display = style.get_property_value("display").map_err(js_error)?;
    Ok(Visibility::from_display(&display))
}

/// Every element the binding writes to or listens on.
struct Elements {
    main_links: Vec<HtmlElement>,
    panels: Vec<HtmlElement>,
    checkboxes: Vec<HtmlInputElement>,
    labels: Vec<HtmlElement>,
    popup: Option<HtmlElement>,
}

impl Elements {
    fn resolve(document: &Document, config: &PageConfig) -> Result<Self, PageError> {
        let rows = query_all(document, &config.link_item)?;
        let mut main_links = Vec::with_capacity(rows.len());
        let mut panels = Vec::with_capacity(rows.len());
        for (link, panel) in pair_within_rows(RowKind::Link, &rows, &config.main_link, &config.edit_links)? {
            main_links.push(html(link, &config.main_link)?);
            panels.push(html(panel, &config.edit_links)?);
        }

        let task_pairs = match config.task_pairing {
            TaskPairing::Row => {
                let rows = query_all(document, &config.task_row)?;
                pair_within_rows(RowKind::Task, &rows, &config.task_checkbox, &config.task_label)?
            }
            TaskPairing::Position => pair_by_position(
                query_all(document, &config.task_checkbox)?,
                query_all(document, &config.task_label)?,
            )?,
        };
        let mut checkboxes = Vec::with_capacity(task_pairs.len());
        let mut labels = Vec::with_capacity(task_pairs.len());
        for (input, label) in task_pairs {
            checkboxes.push(checkbox(input, &config.task_checkbox)?);
            labels.push(html(label, &config.task_label)?);
        }

        let popup = match document.get_element_by_id(&config.popup_id) {
            Some(el) => Some(html(el, &config.popup_id)?),
            None => None,
        };

        Ok(Self { main_links, panels, checkboxes, labels, popup })
    }

    /// Read the rendered visibility and checkbox values into a `PageState`.
    fn snapshot(&self, window: &Window) -> Result<PageState, PageError> {
        let links = self
            .panels
            .iter()
            .map(|panel| Ok(LinkItem { panel: display_of(window, panel)? }))
            .collect::<Result<Vec<_>, PageError>>()?;
        let tasks = self.checkboxes.iter().map(|input| TaskItem { completed: input.checked() }).collect();
        let popup = match &self.popup {
            Some(el) => Some(Popup { visibility: display_of(window, el)? }),
            None => None,
        };
        Ok(PageState { links, tasks, popup })
    }

    fn click_target(&self, event: &Event) -> ClickTarget {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        node.and_then(|n| self.main_links.iter().position(|link| link.is_same_node(Some(n))))
            .map_or(ClickTarget::Elsewhere, ClickTarget::MainLink)
    }
}

// ── Shared handler state ────────────────────────────────────────

struct Bound {
    core: RefCell<PageCore>,
    elements: Elements,
    config: PageConfig,
}

impl Bound {
    /// Reduce `event` and apply the result; failures are logged, not thrown.
    fn run(&self, event: PageEvent, dom_event: Option<&Event>) {
        if let Err(e) = self.dispatch(event, dom_event) {
            log::warn!("{event:?} failed: {e}");
        }
    }

    fn dispatch(&self, event: PageEvent, dom_event: Option<&Event>) -> Result<(), PageError> {
        let actions = self.core.borrow_mut().handle(event)?;
        self.apply(&actions, dom_event)
    }

    fn apply(&self, actions: &[Action], dom_event: Option<&Event>) -> Result<(), PageError> {
        for action in actions {
            match *action {
                Action::PreventDefault => {
                    if let Some(ev) = dom_event {
                        ev.prevent_default();
                    }
                }
                Action::SetPanel { link, visibility } => {
                    let panel = self.elements.panels.get(link).ok_or(PageError::UnknownLink(link))?;
                    set_display(panel, visibility)?;
                }
                Action::SetTaskCompleted { task, completed } => {
                    let label = self.elements.labels.get(task).ok_or(PageError::UnknownTask(task))?;
                    self.style_label(label, completed)?;
                }
                Action::SetPopup(visibility) => {
                    let popup = self.elements.popup.as_ref().ok_or(PageError::NoPopup)?;
                    set_display(popup, visibility)?;
                }
            }
        }
        Ok(())
    }

    fn style_label(&self, label: &HtmlElement, completed: bool) -> Result<(), PageError> {
        let style = label.style();
        if completed {
            style.set_property("color", &self.config.completed_color).map_err(js_error)?;
            style.set_property("text-decoration", &self.config.completed_decoration).map_err(js_error)?;
        } else {
            style.remove_property("color").map_err(js_error)?;
            style.remove_property("text-decoration").map_err(js_error)?;
        }
        Ok(())
    }
}

fn set_display(element: &HtmlElement, visibility: Visibility) -> Result<(), PageError> {
    element.style().set_property("display", visibility.display()).map_err(js_error)
}

// ── Listeners ───────────────────────────────────────────────────

/// An installed listener; removed from its target on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn install(target: &EventTarget, kind: &'static str, handler: impl FnMut(Event) + 'static) -> Result<Self, PageError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {e:?}", self.kind);
        }
    }
}

/// A bound page. Dropping it unbinds every listener it installed.
pub struct PageBinding {
    bound: Rc<Bound>,
    _listeners: Vec<Listener>,
}

impl PageBinding {
    /// Resolve the markup described by `config`, seed the core from it and
    /// install all listeners.
    ///
    /// # Errors
    ///
    /// Fails without installing anything when the markup breaks the page
    /// contract (missing row children, mismatched task counts) or a DOM call
    /// throws.
    pub fn bind(document: &Document, config: PageConfig) -> Result<Self, PageError> {
        config.validate()?;
        let window = document.default_view().ok_or_else(|| PageError::Dom("document has no window".into()))?;
        let elements = Elements::resolve(document, &config)?;
        let core = PageCore::new(elements.snapshot(&window)?);
        let bound = Rc::new(Bound { core: RefCell::new(core), elements, config });

        let labels = bound.core.borrow().sync_labels();
        bound.apply(&labels, None)?;

        let mut listeners = Vec::new();
        for (link, main_link) in bound.elements.main_links.iter().enumerate() {
            let shared = Rc::clone(&bound);
            listeners.push(Listener::install(main_link.as_ref(), "contextmenu", move |ev: Event| {
                shared.run(PageEvent::ContextMenu { link }, Some(&ev));
            })?);
        }

        let shared = Rc::clone(&bound);
        listeners.push(Listener::install(document.as_ref(), "click", move |ev: Event| {
            let target = shared.elements.click_target(&ev);
            shared.run(PageEvent::Click { target }, Some(&ev));
        })?);

        for (task, input) in bound.elements.checkboxes.iter().enumerate() {
            let shared = Rc::clone(&bound);
            let input_for_cb = input.clone();
            listeners.push(Listener::install(input.as_ref(), "change", move |ev: Event| {
                let checked = input_for_cb.checked();
                shared.run(PageEvent::CheckboxChanged { task, checked }, Some(&ev));
            })?);
        }

        {
            let core = bound.core.borrow();
            let state = core.state();
            log::info!(
                "page bound: {} link items, {} tasks, popup {}",
                state.links.len(),
                state.tasks.len(),
                if state.popup.is_some() { "present" } else { "absent" }
            );
        }

        Ok(Self { bound, _listeners: listeners })
    }

    /// Feed an event that does not originate from a DOM listener.
    ///
    /// # Errors
    ///
    /// Whatever the core or the DOM write reports.
    pub fn dispatch(&self, event: PageEvent) -> Result<(), PageError> {
        self.bound.dispatch(event, None)
    }
}

// ── Exports ─────────────────────────────────────────────────────

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PageError::Dom("no document".into()))
}

/// Replace the active binding with a fresh one.
///
/// # Errors
///
/// Bind errors from [`PageBinding::bind`]; the previous binding is already
/// gone when this fails.
pub fn bind_page(config: PageConfig) -> Result<(), PageError> {
    BINDING.with(|slot| slot.borrow_mut().take());
    let binding = PageBinding::bind(&document()?, config)?;
    BINDING.with(|slot| *slot.borrow_mut() = Some(binding));
    Ok(())
}

fn dispatch_active(event: PageEvent) {
    BINDING.with(|slot| match slot.borrow().as_ref() {
        Some(binding) => {
            if let Err(e) = binding.dispatch(event) {
                log::warn!("{event:?} ignored: {e}");
            }
        }
        None => log::warn!("{event:?} ignored: page not bound"),
    });
}

/// Show the popup form.
#[wasm_bindgen(js_name = openForm)]
pub fn open_form() {
    dispatch_active(PageEvent::OpenPopup);
}

/// Hide the popup form.
#[wasm_bindgen(js_name = closeForm)]
pub fn close_form() {
    dispatch_active(PageEvent::ClosePopup);
}

/// Rebind the page, optionally with a JSON `PageConfig`.
///
/// # Errors
///
/// The bind error, as a JS `Error` message.
#[wasm_bindgen(js_name = bindPage)]
pub fn bind_page_js(config: Option<String>) -> Result<(), JsValue> {
    let config = match config {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    };
    config
        .and_then(bind_page)
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

/// Remove every listener installed by the active binding.
#[wasm_bindgen(js_name = unbindPage)]
pub fn unbind_page() {
    if BINDING.with(|slot| slot.borrow_mut().take()).is_some() {
        log::info!("page unbound");
    }
}

/// Config from `<body data-page-config="...">`, defaults when absent.
fn page_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.body().and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE)) {
        Some(raw) => PageConfig::from_json(&raw),
        None => Ok(PageConfig::default()),
    }
}

/// Publish `openForm`/`closeForm` on `window` for inline `onclick` handlers.
fn expose_globals() -> Result<(), PageError> {
    let window = web_sys::window().ok_or_else(|| PageError::Dom("no window".into()))?;
    let open = Closure::<dyn Fn()>::new(open_form).into_js_value();
    let close = Closure::<dyn Fn()>::new(close_form).into_js_value();
    js_sys::Reflect::set(&window, &JsValue::from_str("openForm"), &open).map_err(js_error)?;
    js_sys::Reflect::set(&window, &JsValue::from_str("closeForm"), &close).map_err(js_error)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger unavailable: {e}")));
    }

    let result = expose_globals()
        .and_then(|()| document())
        .and_then(|doc| page_config(&doc))
        .and_then(bind_page);
    if let Err(e) = result {
        log::error!("page binding failed: {e}");
    }
}
