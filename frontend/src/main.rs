mod api;
mod components;

use components::chart_panel::render_chart_panel;
use components::handlers;
use components::header::render_header;
use components::metar_panel::render_metar_panel;
use components::results::render_results;
use components::theme_toggle::{Theme, apply_theme, render_theme_toggle};
use components::tool_tabs::render_tool_tabs;
use components::utils::{render_error_message, render_warning_message};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::{LocalStorage, Storage};
use shared::{AnalysisResult, ToolKind};
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

const THEME_KEY: &str = "aviation-briefing.theme";
const TOOL_KEY: &str = "aviation-briefing.tool";

// Models
struct ChartFile {
    file: GlooFile,
    preview_url: ObjectUrl,
}

// Yew msg components
enum Msg {
    // Tool selection
    SelectTool(ToolKind),

    // METAR/TAF input
    ReportChanged(String),
    Decode,

    // Chart input
    ChartSelected(GlooFile),
    ClearChart,
    Analyze,

    // Analysis outcome
    AnalysisCompleted(AnalysisResult),
    AnalysisFailed(String),

    // UI states
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    tool: ToolKind,
    report: String,
    chart: Option<ChartFile>,
    result: Option<AnalysisResult>,
    loading: bool,
    error: Option<String>,
    warning: Option<String>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
    theme: Theme,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let tool = LocalStorage::get::<String>(TOOL_KEY)
            .ok()
            .and_then(|stored| ToolKind::from_str(&stored).ok())
            .unwrap_or(ToolKind::MetarTaf);
        let theme = Theme::from_stored(LocalStorage::get::<String>(THEME_KEY).ok());
        apply_theme(theme);

        let mut model = Self {
            tool,
            report: String::new(),
            chart: None,
            result: None,
            loading: false,
            error: None,
            warning: None,
            is_dragging: false,
            paste_listener: None,
            theme,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectTool(tool) => handlers::handle_select_tool(self, tool),

            Msg::ReportChanged(report) => handlers::handle_report_changed(self, report),
            Msg::Decode => handlers::handle_decode(self, ctx),

            Msg::ChartSelected(file) => handlers::handle_chart_selected(self, file),
            Msg::ClearChart => handlers::handle_clear_chart(self),
            Msg::Analyze => handlers::handle_analyze(self, ctx),

            Msg::AnalysisCompleted(result) => handlers::handle_analysis_completed(self, result),
            Msg::AnalysisFailed(message) => handlers::handle_analysis_failed(self, message),

            Msg::SetError(error) => {
                self.error = error;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.tool) }
                { render_theme_toggle(self.theme, ctx.link()) }
                { render_tool_tabs(self, ctx) }

                <main class="main-content">
                {
                    match self.tool {
                        ToolKind::MetarTaf => render_metar_panel(self, ctx),
                        ToolKind::SectionalChart => render_chart_panel(self, ctx),
                    }
                }
                { render_warning_message(self) }
                { render_error_message(self, ctx) }
                { render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Model output can be wrong. Always verify against official sources."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
