//! Delete Button Binding
//!
//! Attaches one click listener to a server-rendered button. `data-id` is read
//! on every click, never cached, so the request always targets whatever the
//! page currently carries.

use std::rc::Rc;

use log::{error, warn};
use resource_delete::{BindingConfig, DeleteAction, DeleteOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::BindError;
use crate::fetch::FetchTransport;
use crate::js::error_message;
use crate::navigation::BrowserNavigator;

/// Data attribute (`data-id`) holding the resource identifier
const RESOURCE_ID_KEY: &str = "id";

pub fn bind_delete_button(document: &Document, config: BindingConfig) -> Result<(), BindError> {
    let element_id = config.element_id.clone();
    let button: HtmlElement = document
        .get_element_by_id(&element_id)
        .ok_or_else(|| BindError::MissingElement(element_id.clone()))?
        .dyn_into()
        .map_err(|_| BindError::NotHtmlElement(element_id.clone()))?;

    let action = Rc::new(DeleteAction::new(config, FetchTransport, BrowserNavigator));
    let target = button.clone();

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some(resource_id) = target.dataset().get(RESOURCE_ID_KEY) else {
            warn!("#{} has no data-{}, nothing to delete", element_id, RESOURCE_ID_KEY);
            return;
        };

        let action = Rc::clone(&action);
        wasm_bindgen_futures::spawn_local(async move {
            match action.handle_click(&resource_id).await {
                // Page is unloading
                Ok(DeleteOutcome::Navigated { .. }) => {}
                // Silent for the user; the button stays clickable
                Ok(DeleteOutcome::Rejected { .. }) => {}
                Err(e) => error!("Deleting {} {} failed: {}", action.config().kind, resource_id, e),
            }
        });
    });

    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener(error_message(&e)))?;
    // Listener lives as long as the page
    on_click.forget();
    Ok(())
}
