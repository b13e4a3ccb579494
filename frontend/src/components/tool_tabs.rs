use super::super::{Model, Msg};
use shared::ToolKind;
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_tool_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <nav class="tool-tabs">
            { for ToolKind::iter().map(|tool| {
                let selected = model.tool == tool;
                html! {
                    <button
                        key={tool.as_ref().to_string()}
                        class={classes!("tool-tab", selected.then_some("selected"))}
                        disabled={model.loading && !selected}
                        onclick={ctx.link().callback(move |_| Msg::SelectTool(tool))}
                    >
                        { tool.title() }
                    </button>
                }
            })}
        </nav>
    }
}
