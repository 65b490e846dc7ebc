//! The generation client: one request in, one post-processed result out.

use captionstudio_core::{
    DEFAULT_WATERMARK, GenerationRequest, GenerationResult, SamplingParams, StructuredRequest,
    build_plan,
};
use captionstudio_error::{GenerationError, GenerationErrorKind, GenerationFailed};
use captionstudio_interface::GenerationDriver;
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

const EXPECTED_CAPTIONS: usize = 5;
const EXPECTED_HASHTAGS: std::ops::RangeInclusive<usize> = 10..=15;
const EXPECTED_INSIGHTS: usize = 3;

/// Turns validated requests into captions through a [`GenerationDriver`].
///
/// Each call to [`generate`](Self::generate) issues exactly one driver
/// request. There is no retry and no partial result: a response either
/// satisfies the contract or the call fails with [`GenerationFailed`].
///
/// # Examples
///
/// ```no_run
/// use captionstudio::CaptionGenerator;
/// use captionstudio_core::CaptionParams;
/// use captionstudio_models::{GeminiClient, ModelCatalog};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = CaptionGenerator::new(GeminiClient::from_env(ModelCatalog::default())?);
/// let request = CaptionParams::builder()
///     .topic("launch of our oat-milk latte")
///     .build()?
///     .into_request(false)?;
///
/// let result = generator.generate(&request).await?;
/// for caption in result.captions() {
///     println!("{}", caption);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CaptionGenerator<D> {
    driver: D,
    watermark: String,
    sampling: SamplingParams,
}

impl<D: GenerationDriver> CaptionGenerator<D> {
    /// Generator with the default watermark and sampling.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            watermark: DEFAULT_WATERMARK.to_string(),
            sampling: SamplingParams::default(),
        }
    }

    /// Replace the watermark appended for free callers.
    pub fn with_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.watermark = watermark.into();
        self
    }

    /// Replace the sampling values sent with every request.
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Watermark appended for free callers.
    pub fn watermark(&self) -> &str {
        &self.watermark
    }

    /// Generate captions, hashtags and (when entitled) insights.
    ///
    /// # Errors
    ///
    /// Every failure (transport, status, unparseable or incomplete payload)
    /// is logged with its detail and returned as [`GenerationFailed`].
    #[instrument(
        skip_all,
        fields(
            provider = self.driver.provider_name(),
            entitled = *request.is_entitled(),
            platform = %request.platform(),
        )
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationFailed> {
        match self.try_generate(request).await {
            Ok(result) => {
                info!(
                    captions = result.captions().len(),
                    hashtags = result.hashtags().len(),
                    insights = result.insights().as_ref().map(Vec::len).unwrap_or(0),
                    "Generation succeeded"
                );
                Ok(result)
            }
            Err(e) => {
                error!(error = %e, kind = ?e.kind, "Generation failed");
                Err(GenerationFailed::new())
            }
        }
    }

    async fn try_generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let entitled = *request.is_entitled();
        let plan = build_plan(request);
        let tier = *plan.tier();
        let outbound = StructuredRequest::new(plan, self.sampling);

        debug!(
            tier = %tier,
            model = self.driver.model_name(tier),
            prompt_len = outbound.prompt().len(),
            "Requesting generation"
        );

        let text = self.driver.generate_structured(&outbound).await?;
        let result = parse_generation(&text)?;
        warn_on_cardinality(&result, entitled);

        if entitled {
            Ok(result)
        } else {
            Ok(result.with_watermark(&self.watermark).without_insights())
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGeneration {
    captions: Option<Vec<String>>,
    hashtags: Option<Vec<String>>,
    #[serde(default)]
    insights: Option<Vec<String>>,
}

/// Parse the service's JSON payload into a result.
///
/// The text is trimmed first. `captions` and `hashtags` must be present;
/// `insights` is optional and kept as given.
///
/// # Errors
///
/// Returns [`GenerationErrorKind::MalformedResponse`] when the text is not
/// JSON of the expected shape or a required field is absent.
///
/// # Examples
///
/// ```
/// use captionstudio::parse_generation;
///
/// let result = parse_generation(r#" {"captions":["Hi"],"hashtags":["coffee"]} "#).unwrap();
/// assert_eq!(result.captions(), &vec!["Hi".to_string()]);
/// assert!(result.insights().is_none());
///
/// assert!(parse_generation(r#"{"captions":["Hi"]}"#).is_err());
/// ```
pub fn parse_generation(text: &str) -> Result<GenerationResult, GenerationError> {
    let raw: RawGeneration = serde_json::from_str(text.trim()).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
            "Response is not valid JSON: {}",
            e
        )))
    })?;

    let captions = raw.captions.ok_or_else(|| missing_field("captions"))?;
    let hashtags = raw.hashtags.ok_or_else(|| missing_field("hashtags"))?;

    Ok(GenerationResult::new(captions, hashtags, raw.insights))
}

#[track_caller]
fn missing_field(name: &str) -> GenerationError {
    GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
        "Response is missing required field '{}'",
        name
    )))
}

fn warn_on_cardinality(result: &GenerationResult, entitled: bool) {
    if result.captions().len() != EXPECTED_CAPTIONS {
        warn!(
            expected = EXPECTED_CAPTIONS,
            actual = result.captions().len(),
            "Unexpected caption count"
        );
    }
    if !EXPECTED_HASHTAGS.contains(&result.hashtags().len()) {
        warn!(actual = result.hashtags().len(), "Hashtag count outside 10-15");
    }
    if entitled {
        match result.insights() {
            Some(insights) if insights.len() != EXPECTED_INSIGHTS => warn!(
                expected = EXPECTED_INSIGHTS,
                actual = insights.len(),
                "Unexpected insight count"
            ),
            None => warn!("Entitled response carried no insights"),
            _ => {}
        }
    }
}
