// Fixed instructions sent with every request. Wording is part of the
// observable behaviour of both tools; change with care.

pub const METAR_TAF_PREFIX: &str =
    "Decode and explain the following METAR or TAF in detail, breaking down each component:\n\n";

pub const METAR_TAF_SUFFIX: &str = "\n\nProvide a comprehensive explanation of what each part means, including information about wind, visibility, weather conditions, temperature, dew point, and any other relevant information contained in the METAR or TAF.";

pub const SECTIONAL_CHART_INSTRUCTION: &str = "Analyze this aviation sectional chart. Identify special use airspace like prohibited areas, restricted areas, warning areas, military operating areas (MOA) military training routes. Give me airspace classes and give me the totals counts. Try to give me airport names if you can but do not make up anything.";

/// Interpolates the report verbatim, without escaping.
pub fn metar_taf_instruction(report: &str) -> String {
    let mut text =
        String::with_capacity(METAR_TAF_PREFIX.len() + report.len() + METAR_TAF_SUFFIX.len());
    text.push_str(METAR_TAF_PREFIX);
    text.push_str(report);
    text.push_str(METAR_TAF_SUFFIX);
    text
}
