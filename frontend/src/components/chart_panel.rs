use super::super::{Model, Msg};
use super::utils::{debounce, first_file};
use shared::CHART_ACCEPT;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_chart_panel(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="tool-panel chart-panel">
            { render_file_input_area(model, ctx) }
            { render_chart_preview(model, ctx) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);
        input.set_value("");
        file.map(Msg::ChartSelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let loading = model.loading;
    let trigger_file_input = Callback::from(move |_| {
        if loading {
            return;
        }
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("chart-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="chart-input"
                accept={CHART_ACCEPT}
                style="display: none;"
                disabled={model.loading}
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    model.loading.then_some("busy")
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-map"></i>
                    <p>{"Upload an aviation sectional chart image"}</p>
                    <p class="file-types">{"Drag & drop, paste, or click. Supported formats: PNG, JPG, JPEG"}</p>
                </div>
            </div>
        </>
    }
}

fn render_chart_preview(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(chart) = &model.chart else {
        return html! {};
    };
    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            <figure class="chart-preview">
                <img id="chart-preview-image" src={chart.preview_url.to_string()} alt={chart.file.name()} />
                <figcaption>{"Uploaded Sectional Chart"}</figcaption>
            </figure>
            <div class="button-container">
                <button
                    id="clear-chart-btn"
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    disabled={model.loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearChart)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" Clear"}
                </button>
                <button
                    class="analyze-btn"
                    disabled={model.loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Analyze)
                    })}
                >
                    {
                        if model.loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing the chart..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze Chart"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
