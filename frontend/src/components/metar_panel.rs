use super::super::{Model, Msg};
use super::utils::debounce;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_metar_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ReportChanged(input.value())
    });

    html! {
        <div class="tool-panel metar-panel">
            <p class="panel-intro">{"Enter a METAR or TAF string to decode and explain its components."}</p>
            <label for="report-input">{"METAR or TAF String"}</label>
            <input
                id="report-input"
                type="text"
                class="report-input"
                placeholder="KJFK 121851Z 27015G25KT 10SM FEW050 SCT250 22/11 A2992"
                value={model.report.clone()}
                disabled={model.loading}
                oninput={handle_input}
            />
            <div class="button-container">
                <button
                    class="analyze-btn"
                    disabled={model.loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Decode)
                    })}
                >
                    {
                        if model.loading {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Decoding..."}</> }
                        } else {
                            html! { <><i class="fa-solid fa-cloud-sun"></i>{" Decode"}</> }
                        }
                    }
                </button>
            </div>
        </div>
    }
}
