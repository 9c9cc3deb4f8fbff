// File: crates/figure-cli/src/config.rs
// Summary: TOML chart descriptions and their conversion into RenderRequest values.

use anyhow::{Context, Result};
use figure_core::style::parse_color;
use figure_core::{
    AxisSpec, ChartKind, Dataset, LegendSpec, RenderRequest, ScaleKind, Series, SeriesStyle, StyleSpec, Theme, XDomain,
};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::source::TableCache;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    pub chart: ChartSection,
    pub data: DataSection,
    #[serde(default)]
    pub x_axis: AxisSection,
    #[serde(default)]
    pub y_axis: AxisSection,
    pub legend: Option<LegendSection>,
    #[serde(default)]
    pub style: StyleSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSection {
    pub kind: String,
    pub output: Option<PathBuf>,
}

/// Category labels may be written as numbers (`[1, 2, 4]`) or strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{v}"),
            Label::Float(v) => write!(f, "{v}"),
            Label::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    #[serde(default)]
    pub name: Option<String>,
    /// Default CSV file for `x_column` and series `column`s.
    pub file: Option<PathBuf>,
    pub categories: Option<Vec<Label>>,
    pub x: Option<Vec<f64>>,
    pub x_column: Option<String>,
    #[serde(default)]
    pub series: Vec<SeriesSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSection {
    pub name: String,
    pub values: Option<Vec<f64>>,
    pub column: Option<String>,
    pub file: Option<PathBuf>,
    /// Multiplier applied after loading, e.g. bytes to bits.
    pub scale: Option<f64>,
    pub color: Option<String>,
    pub hatch: Option<String>,
    pub marker: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisSection {
    #[serde(default)]
    pub label: String,
    pub font_size: Option<f32>,
    pub tick_font_size: Option<f32>,
    pub scale: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegendSection {
    #[serde(default = "default_legend_position")]
    pub position: String,
    #[serde(default = "default_legend_columns")]
    pub columns: usize,
    pub font_size: Option<f32>,
    pub frame: Option<bool>,
}

fn default_legend_position() -> String {
    "upper-right".to_string()
}

fn default_legend_columns() -> usize {
    1
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSection {
    pub bar_width: Option<f64>,
    pub group_spacing: Option<f64>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub theme: Option<String>,
    #[serde(default)]
    pub grid: bool,
    pub labels: Option<bool>,
    pub line_width: Option<f32>,
    pub marker_size: Option<f32>,
    pub raster_scale: Option<f32>,
}

impl ChartConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Build the request. Relative paths resolve against `base_dir`; `output`
    /// overrides `[chart] output`.
    pub fn into_request(self, base_dir: &Path, output: Option<PathBuf>) -> Result<RenderRequest> {
        let kind: ChartKind = self.chart.kind.parse()?;
        let output = match output.or(self.chart.output) {
            Some(p) => p,
            None => anyhow::bail!("no output path: set [chart] output or pass --output"),
        };
        let output = resolve(base_dir, &output);

        let mut tables = TableCache::default();
        let data = self.data;
        let default_file = data.file.as_deref().map(|f| resolve(base_dir, f));
        let name = data
            .name
            .clone()
            .or_else(|| output.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "chart".to_string());

        let x = match (data.categories, data.x, data.x_column) {
            (Some(labels), None, None) => XDomain::Categories(labels.iter().map(ToString::to_string).collect()),
            (None, Some(xs), None) => XDomain::Values(xs),
            (None, None, Some(col)) => {
                let file = default_file
                    .as_deref()
                    .with_context(|| format!("x_column '{col}' needs [data] file"))?;
                XDomain::Values(tables.column(file, &col)?)
            }
            _ => anyhow::bail!("[data] needs exactly one of categories, x or x_column"),
        };

        let mut dataset = Dataset::new(name, x);
        let mut series_styles = Vec::with_capacity(data.series.len());
        for s in data.series {
            let values = match (s.values, s.column.as_deref()) {
                (Some(v), None) => v,
                (None, Some(col)) => {
                    let file = s
                        .file
                        .as_deref()
                        .map(|f| resolve(base_dir, f))
                        .or_else(|| default_file.clone())
                        .with_context(|| format!("series '{}' reads column '{col}' but names no file", s.name))?;
                    tables.column(&file, col).with_context(|| format!("series '{}'", s.name))?
                }
                _ => anyhow::bail!("series '{}' needs exactly one of values or column", s.name),
            };
            let mut series = Series::new(s.name.clone(), values);
            if let Some(factor) = s.scale {
                series = series.scaled(factor);
            }
            dataset.add_series(series);

            let mut look = SeriesStyle::new();
            if let Some(c) = &s.color {
                look = look.color(parse_color(c)?);
            }
            if let Some(h) = &s.hatch {
                look = look.hatch(h.parse()?);
            }
            if let Some(m) = &s.marker {
                look = look.marker(m.parse()?);
            }
            series_styles.push(look);
        }

        let x_axis = self.x_axis.into_spec()?;
        let y_axis = self.y_axis.into_spec()?;

        let mut style = StyleSpec::new(kind);
        for look in series_styles {
            style = style.with_series_style(look);
        }
        if let Some(legend) = self.legend {
            style = style.with_legend(legend.into_spec()?);
        }
        style = self.style.apply(style)?;

        debug!("config -> {:?} chart with {} series, output {}", kind, dataset.series.len(), output.display());
        Ok(RenderRequest::new(dataset, x_axis, y_axis, style, output))
    }
}

impl AxisSection {
    fn into_spec(self) -> Result<AxisSpec> {
        let mut spec = AxisSpec::new(self.label);
        if let Some(size) = self.font_size {
            spec.font_size = size;
        }
        if let Some(size) = self.tick_font_size {
            spec.tick_font_size = size;
        }
        if let Some(scale) = &self.scale {
            spec = spec.with_scale(scale.parse::<ScaleKind>()?);
        }
        spec.min = self.min;
        spec.max = self.max;
        Ok(spec)
    }
}

impl LegendSection {
    fn into_spec(self) -> Result<LegendSpec> {
        let mut spec = LegendSpec::new(self.position.parse()?, self.columns);
        if let Some(size) = self.font_size {
            spec = spec.with_font_size(size);
        }
        if let Some(frame) = self.frame {
            spec = spec.with_frame(frame);
        }
        Ok(spec)
    }
}

impl StyleSection {
    fn apply(self, mut style: StyleSpec) -> Result<StyleSpec> {
        if self.bar_width.is_some() || self.group_spacing.is_some() {
            let bw = self.bar_width.unwrap_or(style.bar_width);
            let spacing = self.group_spacing.unwrap_or(style.group_spacing);
            style = style.with_bar_geometry(bw, spacing);
        }
        if self.width.is_some() || self.height.is_some() {
            let w = self.width.unwrap_or(style.width);
            let h = self.height.unwrap_or(style.height);
            style = style.with_page_size(w, h);
        }
        if let Some(theme) = &self.theme {
            style = style.with_theme(theme.parse::<Theme>()?);
        }
        style = style.with_grid(self.grid);
        if let Some(labels) = self.labels {
            style = style.with_labels(labels);
        }
        if let Some(lw) = self.line_width {
            style.line_width = lw;
        }
        if let Some(ms) = self.marker_size {
            style.marker_size = ms;
        }
        if let Some(scale) = self.raster_scale {
            style = style.with_raster_scale(scale);
        }
        Ok(style)
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figure_core::{Hatch, LegendPosition, Marker, RenderError};

    const BARS: &str = r#"
        [chart]
        kind = "grouped-bar"
        output = "out/cumulative.pdf"

        [data]
        categories = [1, 2, 4, 6, 8]

        [[data.series]]
        name = "Kafka"
        values = [26.66, 51.32, 83.4, 103.99, 109.15]
        color = "#e41a1c"
        hatch = "//"

        [[data.series]]
        name = "FastPS"
        values = [33.06, 65.85, 132.24, 197.18, 251.76]
        color = "#377eb8"
        hatch = "\\"

        [x_axis]
        label = "No. of Consumers"
        font_size = 24

        [y_axis]
        label = "Throughput (Mbps)"
        max = 260

        [legend]
        position = "above"
        columns = 2
    "#;

    #[test]
    fn bar_config_builds_request() {
        let cfg = ChartConfig::from_toml(BARS).unwrap();
        let req = cfg.into_request(Path::new("/data"), None).unwrap();

        assert_eq!(req.output(), Path::new("/data/out/cumulative.pdf"));
        assert_eq!(req.dataset().name, "cumulative");
        assert_eq!(req.dataset().x, XDomain::Categories(vec!["1", "2", "4", "6", "8"].into_iter().map(String::from).collect()));
        assert_eq!(req.dataset().series.len(), 2);
        assert_eq!(req.x_axis().font_size, 24.0);
        assert_eq!(req.y_axis().max, Some(260.0));

        let style = req.style();
        assert_eq!(style.kind, ChartKind::GroupedBar);
        assert_eq!(style.series[1].hatch, Some(Hatch::BackDiagonal));
        let legend = style.legend.unwrap();
        assert_eq!(legend.position, LegendPosition::Above);
        assert_eq!(legend.columns, 2);
        assert!(!legend.frame);
        req.validate().unwrap();
    }

    #[test]
    fn output_flag_overrides_config() {
        let cfg = ChartConfig::from_toml(BARS).unwrap();
        let req = cfg.into_request(Path::new("/data"), Some(PathBuf::from("/tmp/x.svg"))).unwrap();
        assert_eq!(req.output(), Path::new("/tmp/x.svg"));
    }

    #[test]
    fn unknown_chart_kind_is_config_error() {
        let text = BARS.replace("grouped-bar", "pie");
        let err = ChartConfig::from_toml(&text).unwrap().into_request(Path::new("."), None).unwrap_err();
        let core = err.downcast_ref::<RenderError>().expect("core error");
        assert!(core.is_config(), "{core}");
    }

    #[test]
    fn unknown_marker_is_config_error() {
        let text = r#"
            [chart]
            kind = "line"
            output = "l.pdf"
            [data]
            x = [1.0, 2.0]
            [[data.series]]
            name = "a"
            values = [1.0, 2.0]
            marker = "star"
            [x_axis]
            label = "x"
            [y_axis]
            label = "y"
        "#;
        let err = ChartConfig::from_toml(text).unwrap().into_request(Path::new("."), None).unwrap_err();
        assert!(err.downcast_ref::<RenderError>().map_or(false, RenderError::is_config));
    }

    #[test]
    fn missing_axis_label_fails_validation() {
        let text = BARS.replace("label = \"No. of Consumers\"", "");
        let req = ChartConfig::from_toml(&text).unwrap().into_request(Path::new("."), None).unwrap();
        assert!(req.validate().unwrap_err().is_config());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = BARS.replace("columns = 2", "columns = 2\nncol = 2");
        assert!(ChartConfig::from_toml(&text).is_err());
    }

    #[test]
    fn csv_columns_and_scale() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tp.csv"), "size,tp\n16,0.5\n32,1.0\n").unwrap();
        let text = r#"
            [chart]
            kind = "line-with-markers"
            output = "tp.png"
            [data]
            file = "tp.csv"
            x_column = "size"
            [[data.series]]
            name = "Throughput"
            column = "tp"
            scale = 8.0
            marker = "o"
            [x_axis]
            label = "Record Size (bytes)"
            scale = "log"
            [y_axis]
            label = "Throughput (Mbps)"
            scale = "log"
        "#;
        let req = ChartConfig::from_toml(text).unwrap().into_request(dir.path(), None).unwrap();
        assert_eq!(req.dataset().x, XDomain::Values(vec![16.0, 32.0]));
        assert_eq!(req.dataset().series[0].values, vec![4.0, 8.0]);
        assert_eq!(req.style().series[0].marker, Some(Marker::Circle));
        assert!(req.x_axis().is_log() && req.y_axis().is_log());
        assert_eq!(req.output(), dir.path().join("tp.png"));
    }

    #[test]
    fn demo_configs_validate() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        for name in ["cumulative_tp.toml", "record_size_latency.toml"] {
            let req = ChartConfig::load(&demos.join(name)).unwrap().into_request(&demos, None).unwrap();
            req.validate().unwrap();
            assert!(req.dataset().len() >= 5, "{name}");
        }
    }

    #[test]
    fn ambiguous_x_domain_is_rejected() {
        let text = BARS.replace("categories = [1, 2, 4, 6, 8]", "categories = [1, 2]\nx = [1.0, 2.0]");
        assert!(ChartConfig::from_toml(&text).unwrap().into_request(Path::new("."), None).is_err());
    }
}
