use crate::tools::extract_string_arg;
use crate::traits::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::json;

pub struct CalculateMetricsTool;

/// `average`: arithmetic mean, 0 for no values. `growth`: percent change from
/// the first to the last value. Anything else, fewer than two growth values or
/// a zero base yields `None`.
pub fn calculate_metric(metric_type: &str, values: &[f64]) -> Option<f64> {
    match metric_type {
        "average" => Some(if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }),
        "growth" => match (values.first(), values.last()) {
            (Some(&first), Some(&last)) if values.len() >= 2 && first != 0.0 => {
                Some((last - first) / first * 100.0)
            }
            _ => None,
        },
        _ => None,
    }
}

#[async_trait]
impl Tool for CalculateMetricsTool {
    fn name(&self) -> &str {
        "calculate_metrics"
    }

    fn description(&self) -> &str {
        "Calculate financial metrics"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "metric_type": {
                    "type": "string",
                    "enum": ["average", "growth"],
                    "description": "Metric to compute: 'average' or 'growth' (percent change first to last)"
                },
                "values": {
                    "type": "array",
                    "items": {"type": "number"},
                    "description": "Series of numeric values, oldest first"
                }
            },
            "required": ["metric_type", "values"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let metric_type = extract_string_arg(&args, "metric_type")?;

        let values = args
            .get("values")
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow::anyhow!("Missing 'values' parameter"))?
            .iter()
            .map(|v| v.as_f64())
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| anyhow::anyhow!("'values' must contain only numbers"))?;

        let result = calculate_metric(&metric_type, &values);
        Ok(ToolResult::success(json!({ "result": result }).to_string()))
    }
}
