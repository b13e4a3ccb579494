use super::super::Model;
use shared::{RenderStyle, render_markdown};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = model.result.as_ref().filter(|r| r.tool == model.tool) else {
        return html! {};
    };

    let body = match result.tool.render_style() {
        RenderStyle::Markdown => {
            let rendered = format!(
                "<div class=\"markdown-body\">{}</div>",
                render_markdown(&result.text)
            );
            Html::from_html_unchecked(AttrValue::from(rendered))
        }
        RenderStyle::PlainText => html! {
            <textarea class="result-text" readonly=true rows="15" value={result.text.clone()} />
        },
    };

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2>{ result.tool.result_heading() }</h2>
            </div>
            <div class="result-body">{ body }</div>
        </div>
    }
}
