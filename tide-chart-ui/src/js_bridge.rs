//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart lives in `assets/js/line-chart.js` and is evaluated
//! as a global (no ES modules) exposed via `window.*`. This module embeds it,
//! serializes series data, and calls into it.

use tide_data::ReadingSeries;

// Embed the D3 chart JS at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Tide JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal. JSON string syntax is valid JS.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load the chart script into global scope, once per page.
///
/// The script only touches `d3` when a chart is drawn, so it is evaluated
/// straight away; `scheduleTideChart` waits for D3 itself. The functions are
/// promoted to `window.*` for the calls below.
pub fn init_charts() {
    let init_js = format!(
        r#"
        (function() {{
            if (window.__tideChartsReady) {{ return; }}
            (0, eval)({script});
            window.scheduleTideChart = scheduleTideChart;
            window.renderTideChart = renderTideChart;
            window.destroyTideChart = destroyTideChart;
            window.__tideChartsReady = true;
            console.log('Tide charts initialized');
        }})();
        "#,
        script = js_string_literal(LINE_CHART_JS)
    );
    call_js(&init_js);
}

/// Build the JS that hands a series to `scheduleTideChart`.
pub fn line_chart_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    format!(
        "window.scheduleTideChart({}, {}, {});",
        js_string_literal(container_id),
        js_string_literal(data_json),
        js_string_literal(config_json)
    )
}

/// JS that clears `container_id` and cancels any render still waiting on it.
pub fn destroy_chart_script(container_id: &str) -> String {
    format!(
        "window.destroyTideChart({});",
        js_string_literal(container_id)
    )
}

/// Render a reading series as a time-axis line chart into `container_id`.
///
/// The chart is drawn once D3.js has loaded and the container exists. Until
/// then it is pending, and a later render or [`destroy_chart`] for the same
/// container replaces or cancels it.
pub fn render_reading_series(container_id: &str, series: &ReadingSeries) {
    let data_json = serde_json::to_string(&series.points).unwrap_or_default();
    let config_json = serde_json::to_string(&series.chart_config()).unwrap_or_default();
    log::info!(
        "Rendering {} points for {}",
        series.len(),
        series.station_label
    );
    call_js(&line_chart_script(container_id, &data_json, &config_json));
}

/// Destroy the chart in the given container, including a pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_script(container_id));
}
