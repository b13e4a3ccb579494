use shared::ToolKind;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(tool: ToolKind) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-plane"></i> { format!(" {}", tool.title()) }</h1>
            <p class="subtitle">{"Aviation weather and chart briefings"}</p>
        </header>
    }
}
