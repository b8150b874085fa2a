//! Built-in dashboard page template.
//!
//! A single static HTML page in a neo-brutalist style with thick borders
//! and hard shadows. Section content is substituted into the `{{NAME}}`
//! placeholders by the adapter.

pub fn template() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{PROJECT_TITLE}}</title>
<style>
  :root {
    --ink: #0a0a0a;
    --paper: #fdf6e3;
    --panel: #ffffff;
    --accent: #f97316;
    --shadow: 6px 6px 0 var(--ink);
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body {
    background: var(--paper);
    color: var(--ink);
    font-family: "Space Grotesk", "Arial Black", sans-serif;
    padding: 32px 24px 64px;
    max-width: 1180px;
    margin: 0 auto;
  }
  header {
    border: 4px solid var(--ink);
    background: var(--accent);
    box-shadow: var(--shadow);
    padding: 32px;
    margin-bottom: 40px;
  }
  header h1 { font-size: 2.4rem; text-transform: uppercase; letter-spacing: 1px; }
  header h2 { font-size: 1.2rem; margin-top: 8px; }
  header p { margin-top: 8px; font-weight: 600; }
  section { margin-bottom: 48px; }
  section > h2 {
    display: inline-block;
    background: var(--ink);
    color: var(--paper);
    padding: 6px 14px;
    margin-bottom: 20px;
    text-transform: uppercase;
  }
  .stats-grid, .env-grid, .insights-grid, .model-grid {
    display: grid;
    gap: 24px;
  }
  .stats-grid { grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
  .env-grid, .insights-grid, .model-grid { grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }
  .stat-card, .env-card, .insight-card, .model-card, .chart-panel {
    background: var(--panel);
    border: 3px solid var(--ink);
    box-shadow: var(--shadow);
    padding: 20px;
  }
  .stat-label { font-size: 0.8rem; text-transform: uppercase; }
  .stat-value { font-size: 2rem; font-weight: 700; margin: 6px 0; }
  .stat-change { font-size: 0.85rem; }
  .stat-change.positive { color: #15803d; font-weight: 700; }
  .model-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 14px; }
  .badge {
    border: 2px solid var(--ink);
    padding: 2px 10px;
    font-size: 0.75rem;
    font-weight: 700;
    text-transform: uppercase;
  }
  .badge-best { background: #fbbf24; }
  .badge-good { background: #86efac; }
  .badge-baseline { background: #d4d4d8; }
  .badge-conservative { background: #93c5fd; }
  .model-metrics .metric {
    display: flex;
    justify-content: space-between;
    padding: 5px 4px;
    border-bottom: 1px dashed var(--ink);
  }
  .metric.highlighted { background: #fef08a; font-weight: 700; }
  table { width: 100%; border-collapse: collapse; background: var(--panel); border: 3px solid var(--ink); box-shadow: var(--shadow); }
  th, td { border: 1px solid var(--ink); padding: 8px 10px; text-align: right; font-size: 0.9rem; }
  th:first-child, td:first-child { text-align: left; }
  thead th { background: var(--ink); color: var(--paper); text-transform: uppercase; }
  td.highlighted { background: #fef08a; font-weight: 700; }
  .env-card h3, .insight-card h3 { margin-bottom: 12px; }
  .env-card ul { list-style: none; }
  .env-card li { display: flex; justify-content: space-between; padding: 4px 0; border-bottom: 1px dashed var(--ink); font-size: 0.9rem; }
  .insight-card p { font-size: 0.92rem; line-height: 1.5; }
  .chart-panel { margin-bottom: 24px; }
  .chart-panel h3 { margin-bottom: 12px; text-transform: uppercase; }
  .chart-panel svg { width: 100%; height: auto; background: var(--panel); }
  .tooltip { position: relative; border-bottom: 2px dotted var(--ink); cursor: help; }
  .tooltip .tooltip-text {
    display: none;
    position: absolute;
    left: 0;
    bottom: 130%;
    z-index: 10;
    width: 260px;
    background: var(--ink);
    color: var(--paper);
    padding: 10px;
    font-size: 0.78rem;
    font-weight: 400;
    text-transform: none;
    text-align: left;
  }
  .tooltip:hover .tooltip-text { display: block; }
  footer { font-size: 0.8rem; text-align: center; margin-top: 48px; }
</style>
</head>
<body>
<header>
  <h1>{{PROJECT_TITLE}}</h1>
  <h2>{{PROJECT_SUBTITLE}}</h2>
  <p>{{PROJECT_DESCRIPTION}}</p>
</header>

<section>
  <h2>Key Results</h2>
  <div class="stats-grid">{{STATS_GRID}}</div>
</section>

<section>
  <h2>Portfolio Value Over Time</h2>
  <div class="chart-panel">{{PORTFOLIO_CHART}}</div>
</section>

<section>
  <h2>Annual Returns</h2>
  <div class="chart-panel">{{RETURNS_CHART}}</div>
</section>

<section>
  <h2>Risk vs Return</h2>
  <div class="chart-panel">{{RISK_RETURN_CHART}}</div>
</section>

<section>
  <h2>Literature Benchmark</h2>
  <div class="chart-panel">{{BENCHMARK_CHART}}</div>
  {{BENCHMARK_DETAILS}}
</section>

<section>
  <h2>Cumulative Returns</h2>
  <div class="chart-panel">{{CUMULATIVE_CHART}}</div>
</section>

<section>
  <h2>Trading Actions per Month</h2>
  <div class="chart-panel">{{ACTIONS_CHART}}</div>
</section>

<section>
  <h2>Daily Returns Distribution</h2>
  <div class="chart-panel">{{DISTRIBUTION_CHART}}</div>
</section>

<section>
  <h2>Annual Volatility</h2>
  <div class="chart-panel">{{VOLATILITY_CHART}}</div>
</section>

<section>
  <h2>Model Performance</h2>
  <div class="model-grid">{{MODEL_CARDS}}</div>
</section>

<section>
  <h2>Full Metric Comparison</h2>
  {{METRICS_TABLE}}
</section>

<section>
  <h2>Trading Environment</h2>
  <div class="env-grid">{{ENVIRONMENT_GRID}}</div>
</section>

<section>
  <h2>Key Insights</h2>
  <div class="insights-grid">{{INSIGHTS_GRID}}</div>
</section>

<footer>Generated {{GENERATED_AT}}</footer>
</body>
</html>
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_contains_every_placeholder_once() {
        let t = template();
        for name in [
            "{{PROJECT_SUBTITLE}}",
            "{{PROJECT_DESCRIPTION}}",
            "{{STATS_GRID}}",
            "{{PORTFOLIO_CHART}}",
            "{{RETURNS_CHART}}",
            "{{RISK_RETURN_CHART}}",
            "{{BENCHMARK_CHART}}",
            "{{BENCHMARK_DETAILS}}",
            "{{CUMULATIVE_CHART}}",
            "{{ACTIONS_CHART}}",
            "{{DISTRIBUTION_CHART}}",
            "{{VOLATILITY_CHART}}",
            "{{MODEL_CARDS}}",
            "{{METRICS_TABLE}}",
            "{{ENVIRONMENT_GRID}}",
            "{{INSIGHTS_GRID}}",
            "{{GENERATED_AT}}",
        ] {
            assert_eq!(t.matches(name).count(), 1, "{name}");
        }
        // title appears in <title> and <h1>
        assert_eq!(t.matches("{{PROJECT_TITLE}}").count(), 2);
    }

    #[test]
    fn template_styles_every_section_class() {
        let t = template();
        for class in ["stat-card", "model-card", "env-card", "insight-card", "tooltip-text"] {
            assert!(t.contains(class), "{class}");
        }
    }
}
