use async_trait::async_trait;

use super::Tool;
use crate::errors::AgentResult;

/// Stub weather lookup. Always reports the same temperature.
pub struct WeatherTool;

pub fn get_weather_info(city: &str) -> String {
    format!(
        "This city {} has a temperature of 42 Degree C which is quite hot🥵",
        city
    )
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "getWeatherInfo"
    }

    fn description(&self) -> String {
        "getWeatherInfo(city: string): string Returns the current weather for the given city".to_string()
    }

    async fn call(&self, input: &str) -> AgentResult<String> {
        Ok(get_weather_info(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_weather_info_is_deterministic() {
        let first = get_weather_info("Paris");
        assert_eq!(first, get_weather_info("Paris"));
        assert_eq!(
            first,
            "This city Paris has a temperature of 42 Degree C which is quite hot🥵"
        );
    }

    #[tokio::test]
    async fn test_tool_call() {
        assert_eq!(
            WeatherTool.call("Bengaluru").await.unwrap(),
            get_weather_info("Bengaluru")
        );
    }
}
