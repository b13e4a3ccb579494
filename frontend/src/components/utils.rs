use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::ChartMediaType;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

pub fn chart_media_type(file: &GlooFile) -> Option<ChartMediaType> {
    let mime = file.raw_mime_type();
    let name = file.name();
    ChartMediaType::detect(Some(&mime), Some(&name))
}

pub fn render_warning_message(model: &Model) -> Html {
    if let Some(warning) = &model.warning {
        html! {
            <div class="warning-message">
                <i class="fa-solid fa-triangle-exclamation"></i>
                <p>{ warning }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::SetError(None))}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
