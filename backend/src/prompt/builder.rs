use super::payload::{ContentBlock, PromptPayload};
use super::templates::{SECTIONAL_CHART_INSTRUCTION, metar_taf_instruction};
use crate::imaging::png_encoder::{EncodedChart, PNG_MEDIA_TYPE};

pub fn build_metar_payload(report: &str) -> PromptPayload {
    PromptPayload::single_user_turn(vec![ContentBlock::text(metar_taf_instruction(report))])
}

/// Image first, then the instruction.
pub fn build_chart_payload(chart: &EncodedChart) -> PromptPayload {
    PromptPayload::single_user_turn(vec![
        ContentBlock::base64_image(PNG_MEDIA_TYPE, chart.data.clone()),
        ContentBlock::text(SECTIONAL_CHART_INSTRUCTION),
    ])
}
