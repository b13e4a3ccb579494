use super::super::{ChartFile, Model, Msg, THEME_KEY, TOOL_KEY};
use super::theme_toggle::apply_theme;
use super::utils::{chart_media_type, first_file};
use crate::api;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::{LocalStorage, Storage};
use shared::{AnalysisResult, ChartMediaType, ToolKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_select_tool(model: &mut Model, tool: ToolKind) -> bool {
    if model.tool == tool {
        return false;
    }

    model.tool = tool;
    model.warning = None;
    model.error = None;
    if let Err(e) = LocalStorage::set(TOOL_KEY, tool.as_ref()) {
        log::warn!("Could not remember selected tool: {}", e);
    }
    true
}

pub fn handle_report_changed(model: &mut Model, report: String) -> bool {
    model.report = report;
    model.warning = None;
    false
}

pub fn handle_decode(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        return false;
    }

    if model.report.is_empty() {
        model.warning = Some("Please enter a METAR or TAF string to decode.".into());
        return true;
    }

    start_request(model);
    send_decode_request(ctx, model.report.clone());
    true
}

/// What to do with a chart picked, dropped, or pasted by the user.
#[derive(Debug, PartialEq)]
enum ChartIntake {
    /// An analysis is outstanding; the current chart stays in place.
    Busy,
    Unsupported(String),
    Accepted,
}

fn chart_intake(loading: bool, media_type: Option<ChartMediaType>, file_name: &str) -> ChartIntake {
    if loading {
        return ChartIntake::Busy;
    }
    match media_type {
        Some(_) => ChartIntake::Accepted,
        None => ChartIntake::Unsupported(format!(
            "Unsupported file type: {}. Upload a PNG or JPEG image.",
            file_name
        )),
    }
}

pub fn handle_chart_selected(model: &mut Model, file: GlooFile) -> bool {
    match chart_intake(model.loading, chart_media_type(&file), &file.name()) {
        ChartIntake::Busy => return false,
        ChartIntake::Unsupported(message) => {
            model.error = Some(message);
            return true;
        }
        ChartIntake::Accepted => {}
    }

    let preview_url = ObjectUrl::from(file.clone());
    model.chart = Some(ChartFile { file, preview_url });
    model.result = None;
    model.error = None;
    model.warning = None;
    true
}

pub fn handle_clear_chart(model: &mut Model) -> bool {
    if model.loading {
        return false;
    }

    model.chart = None;
    model.result = None;
    model.error = None;
    model.warning = None;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if model.loading {
        return false;
    }

    let Some(file) = model.chart.as_ref().map(|chart| chart.file.clone()) else {
        model.warning = Some("Please upload an aviation sectional chart image.".into());
        return true;
    };

    start_request(model);
    send_chart_request(ctx, file);
    true
}

pub fn handle_analysis_completed(model: &mut Model, result: AnalysisResult) -> bool {
    model.loading = false;
    model.error = None;
    model.result = Some(result);
    true
}

pub fn handle_analysis_failed(model: &mut Model, message: String) -> bool {
    model.loading = false;
    model.result = None;
    model.error = Some(message);
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    apply_theme(model.theme);
    if let Err(e) = LocalStorage::set(THEME_KEY, model.theme.as_ref()) {
        log::warn!("Could not remember theme: {}", e);
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;
    if model.loading {
        return true;
    }

    if let Some(file) = event
        .data_transfer()
        .and_then(|dt| dt.files())
        .and_then(|files| first_file(&files))
    {
        ctx.link().send_message(Msg::ChartSelected(file));
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if model.tool != ToolKind::SectionalChart || model.loading {
        return false;
    }

    if let Some(file) = event
        .clipboard_data()
        .and_then(|dt| dt.files())
        .and_then(|files| first_file(&files))
    {
        event.prevent_default();
        ctx.link().send_message(Msg::ChartSelected(file));
        return true;
    }
    false
}

fn start_request(model: &mut Model) {
    model.loading = true;
    model.result = None;
    model.error = None;
    model.warning = None;
}

fn send_decode_request(ctx: &Context<Model>, report: String) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::decode_report(&report).await {
            Ok(result) => link.send_message(Msg::AnalysisCompleted(result)),
            Err(e) => {
                gloo_console::error!(format!("Decode failed: {}", e));
                link.send_message(Msg::AnalysisFailed(e))
            }
        }
    });
}

fn send_chart_request(ctx: &Context<Model>, file: GlooFile) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::analyze_chart(&file).await {
            Ok(result) => link.send_message(Msg::AnalysisCompleted(result)),
            Err(e) => {
                gloo_console::error!(format!("Chart analysis failed: {}", e));
                link.send_message(Msg::AnalysisFailed(e))
            }
        }
    });
}
