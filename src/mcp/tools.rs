//! Tool declarations and handlers
//!
//! Each handler reads loosely typed JSON arguments, calls into the color
//! core and renders a plain text result.

use serde_json::{Map, Value};

use crate::color::{self, ColorError};
use super::error::{McpError, McpResult, ToolError, ToolResult};
use super::protocol::{CallToolResult, InputSchema, Property, Tool};

const COLOR_EXAMPLES: &str =
    "Input color value in any supported format (e.g., '#FF0000', 'rgb(255, 0, 0)', 'hsl(0, 100%, 50%)')";
const PRESERVE_ALPHA: &str = "Whether to preserve the alpha channel (default: true)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    ConvertColor,
    DetectFormat,
    ListFormats,
    CompareColors,
    ConvertColorsBatch,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        ToolName::ConvertColor,
        ToolName::DetectFormat,
        ToolName::ListFormats,
        ToolName::CompareColors,
        ToolName::ConvertColorsBatch,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ConvertColor => "convert_color",
            ToolName::DetectFormat => "detect_format",
            ToolName::ListFormats => "list_formats",
            ToolName::CompareColors => "compare_colors",
            ToolName::ConvertColorsBatch => "convert_colors_batch",
        }
    }

    fn definition(&self) -> Tool {
        let (description, input_schema) = match self {
            ToolName::ConvertColor => (
                "Convert colors between different web color formats (HEX, RGB, HSL, OKLCH, LAB, XYZ, HWB, CMYK, etc.)",
                InputSchema::object(
                    vec![
                        ("color", Property::string(COLOR_EXAMPLES)),
                        (
                            "target_format",
                            Property::string("Target color format").with_enum(color::supported_formats()),
                        ),
                        ("preserve_alpha", Property::boolean(PRESERVE_ALPHA)),
                    ],
                    vec!["color", "target_format"],
                ),
            ),
            ToolName::DetectFormat => (
                "Detect the format of an input color string",
                InputSchema::object(
                    vec![("color", Property::string("Color value to detect format from"))],
                    vec!["color"],
                ),
            ),
            ToolName::ListFormats => (
                "List all supported color formats",
                InputSchema::object(Vec::new(), Vec::new()),
            ),
            ToolName::CompareColors => (
                "Compare two colors for perceptual similarity, contrast ratio, and component differences",
                InputSchema::object(
                    vec![
                        (
                            "color1",
                            Property::string(
                                "First color value in any supported format (e.g., '#FF0000', 'rgb(255, 0, 0)', 'hsl(0, 100%, 50%)')",
                            ),
                        ),
                        ("color2", Property::string("Second color value in any supported format")),
                        (
                            "detailed",
                            Property::boolean("Whether to include detailed component breakdown (default: false)"),
                        ),
                    ],
                    vec!["color1", "color2"],
                ),
            ),
            ToolName::ConvertColorsBatch => (
                "Convert multiple colors between different web color formats in a single request",
                InputSchema::object(
                    vec![
                        (
                            "colors",
                            Property::string_array("Array of input color values in any supported format"),
                        ),
                        (
                            "target_format",
                            Property::string("Target color format for all conversions")
                                .with_enum(color::supported_formats()),
                        ),
                        ("preserve_alpha", Property::boolean(PRESERVE_ALPHA)),
                    ],
                    vec!["colors", "target_format"],
                ),
            ),
        };

        Tool {
            name: self.as_str(),
            description,
            input_schema,
        }
    }
}

/// Declarations returned by `tools/list`
pub fn tool_definitions() -> Vec<Tool> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}

/// Run a tool by name. Only an unknown name is a protocol error; handler
/// failures come back as an `isError` result.
pub fn call_tool(name: &str, arguments: &Map<String, Value>) -> McpResult<CallToolResult> {
    let tool = ToolName::from_name(name).ok_or_else(|| McpError::UnknownTool(name.to_string()))?;

    let outcome = match tool {
        ToolName::ConvertColor => convert_color(arguments),
        ToolName::DetectFormat => detect_format(arguments),
        ToolName::ListFormats => Ok(list_formats()),
        ToolName::CompareColors => compare_colors(arguments),
        ToolName::ConvertColorsBatch => convert_colors_batch(arguments),
    };

    match outcome {
        Ok(text) => Ok(CallToolResult::text(text)),
        Err(e) => {
            log::warn!("Tool {} failed: {}", name, e);
            Ok(CallToolResult::error(e))
        }
    }
}

fn required_str<'a>(args: &'a Map<String, Value>, key: &'static str) -> ToolResult<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or(ToolError::MissingString(key))
}

/// Non-boolean values fall back to the default
fn optional_bool(args: &Map<String, Value>, key: &str, default: bool) -> bool {
    args.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub fn convert_color(args: &Map<String, Value>) -> ToolResult<String> {
    let input = required_str(args, "color")?;
    let target_format = required_str(args, "target_format")?;
    let preserve_alpha = optional_bool(args, "preserve_alpha", true);

    let input_format = color::detect_input_format(input).map_err(ToolError::Detection)?;
    let output = color::convert(input, target_format, preserve_alpha)?;

    Ok(format!(
        "Input color: {} (format: {})\nOutput color: {} (format: {})\nAlpha preserved: {}",
        input, input_format, output, target_format, preserve_alpha
    ))
}

pub fn detect_format(args: &Map<String, Value>) -> ToolResult<String> {
    let input = required_str(args, "color")?;
    let format = color::detect_input_format(input)?;
    Ok(format!("Color: {}\nDetected format: {}", input, format))
}

pub fn list_formats() -> String {
    format!("Supported color formats:\n{}", color::supported_formats().join(", "))
}

pub fn compare_colors(args: &Map<String, Value>) -> ToolResult<String> {
    let color1 = required_str(args, "color1")?;
    let color2 = required_str(args, "color2")?;
    let detailed = optional_bool(args, "detailed", false);

    let result = color::compare(color1, color2)?;
    Ok(if detailed {
        color::format_detailed(&result)
    } else {
        color::format_basic(&result)
    })
}

pub fn convert_colors_batch(args: &Map<String, Value>) -> ToolResult<String> {
    let items = args
        .get("colors")
        .and_then(Value::as_array)
        .ok_or(ToolError::MissingArray("colors"))?;
    if items.is_empty() {
        return Err(ToolError::EmptyBatch);
    }

    let mut colors = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let text = item.as_str().ok_or(ToolError::NotAString(index))?;
        if text.trim().is_empty() {
            return Err(ToolError::EmptyColor(index));
        }
        colors.push(text);
    }

    let target_format = required_str(args, "target_format")?;
    let preserve_alpha = optional_bool(args, "preserve_alpha", true);

    let mut converted: Vec<(&str, String)> = Vec::new();
    let mut failed: Vec<(&str, ColorError)> = Vec::new();
    for &input in &colors {
        match color::convert(input, target_format, preserve_alpha) {
            Ok(output) => converted.push((input, output)),
            Err(e) => failed.push((input, e)),
        }
    }
    log::debug!(
        "Batch to {}: {} converted, {} failed",
        target_format,
        converted.len(),
        failed.len()
    );

    let mut text = format!(
        "Batch Conversion to {}\nAlpha preserved: {}\nTotal colors: {}\n\n",
        target_format,
        preserve_alpha,
        colors.len()
    );
    if !converted.is_empty() {
        text.push_str("Converted colors:\n");
        for (input, output) in &converted {
            text.push_str(&format!("  {} → {}\n", input, output));
        }
    }
    if !failed.is_empty() {
        text.push_str("\nErrors:\n");
        for (input, err) in &failed {
            text.push_str(&format!("  {}: {}\n", input, err));
        }
    }

    Ok(text)
}
