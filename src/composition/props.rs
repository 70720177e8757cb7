//! Input properties of the five compositions.
//!
//! JSON keys are camelCase. Every struct is `#[serde(default)]`, so a partial object merges over
//! the composition defaults.

use crate::{
    components::api::ApiEndpoint,
    components::terminal::{TerminalOutput, default_outputs},
    foundation::core::Rgba8,
    theme::colors,
    theme::palette::Theme,
};

pub(crate) const DEFAULT_LOGO_URL: &str =
    "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?w=200&h=200&fit=crop";
pub(crate) const SHOWCASE_LOGO_URL: &str =
    "https://images.unsplash.com/photo-1614064641938-3bbee52942c7?w=400&h=400&fit=crop";

const DEFAULT_SNIPPET: &str = "function revolutionize() {
  const future = await buildTechnology();
  return future.impact();
}";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Properties of the TechVideo composition; also the editable state of the editor.
pub struct TechVideoProps {
    /// Heading of the title scene.
    pub title: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Logo image reference.
    pub logo_url: String,
    /// Visual theme of every scene.
    pub theme: Theme,
    /// Source typed out by the code scene.
    pub code_snippet: String,
}

impl Default for TechVideoProps {
    fn default() -> Self {
        Self {
            title: "Advanced Tech Solutions".to_string(),
            subtitle: "Building the Future with Code".to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            theme: Theme::Cyberpunk,
            code_snippet: DEFAULT_SNIPPET.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Properties of the CodeReveal showcase.
pub struct CodeRevealProps {
    /// Language label of the editor window.
    pub language: String,
    /// Page heading.
    pub title: String,
}

impl Default for CodeRevealProps {
    fn default() -> Self {
        Self {
            language: "typescript".to_string(),
            title: "Code Animation Demo".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Properties of the LogoMorph showcase.
pub struct LogoMorphProps {
    /// Brand name in the corner.
    pub brand_name: String,
    /// Brand name color.
    pub primary_color: Rgba8,
    /// Page heading color.
    pub secondary_color: Rgba8,
}

impl Default for LogoMorphProps {
    fn default() -> Self {
        Self {
            brand_name: "TechCorp".to_string(),
            primary_color: colors::NEON_BLUE,
            secondary_color: colors::NEON_PURPLE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Properties of the APIVisualization composition.
pub struct ApiVisualizationProps {
    /// API name in the header.
    pub api_name: String,
    /// Documented endpoints, two per row.
    pub endpoints: Vec<ApiEndpoint>,
}

impl Default for ApiVisualizationProps {
    fn default() -> Self {
        Self {
            api_name: "TechAPI v2.0".to_string(),
            endpoints: vec![
                ApiEndpoint::new("GET", "/users", "Fetch user data"),
                ApiEndpoint::new("POST", "/auth", "User authentication"),
                ApiEndpoint::new("PUT", "/profile", "Update profile"),
                ApiEndpoint::new("DELETE", "/sessions", "Logout user"),
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Properties of the Terminal composition.
pub struct TerminalProps {
    /// Commands typed one per 40-frame slot.
    pub commands: Vec<String>,
    /// Output printed after each command.
    pub outputs: Vec<TerminalOutput>,
}

impl Default for TerminalProps {
    fn default() -> Self {
        Self {
            commands: [
                "npm install @techcorp/advanced-toolkit",
                "npm run build:production",
                "docker build -t techapp .",
                "kubectl apply -f deployment.yaml",
                "echo 'Deployment successful! \u{1F680}'",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            outputs: default_outputs(),
        }
    }
}

/// Source shown by the CodeReveal showcase.
pub(crate) const SHOWCASE_CODE: &str = r"// Advanced AI-Powered Analytics Dashboard
import { useAI, DataProcessor, VisualizationEngine } from '@techcorp/ai-toolkit';

class AdvancedAnalytics {
  private ai: AIEngine;
  private processor: DataProcessor;

  constructor() {
    this.ai = new AIEngine({
      model: 'gpt-4-turbo',
      capabilities: ['analysis', 'prediction', 'insights']
    });
    this.processor = new DataProcessor();
  }

  async generateInsights(data: Dataset): Promise<Insights> {
    const processed = await this.processor.clean(data);
    const predictions = await this.ai.predict(processed);

    return {
      trends: this.analyzeTrends(processed),
      predictions: predictions,
      recommendations: await this.ai.recommend(predictions),
      confidence: this.calculateConfidence(predictions)
    };
  }

  private analyzeTrends(data: ProcessedData): TrendAnalysis {
    return data.timeSeries.reduce((trends, point) => {
      const velocity = this.calculateVelocity(point);
      const momentum = this.calculateMomentum(velocity);

      return {
        ...trends,
        [point.metric]: {
          direction: velocity > 0 ? 'upward' : 'downward',
          strength: Math.abs(momentum),
          forecast: this.projectFuture(point, velocity)
        }
      };
    }, {} as TrendAnalysis);
  }
}

export default AdvancedAnalytics;";

#[cfg(test)]
#[path = "../../tests/unit/composition/props.rs"]
mod tests;
