//! Response contract the generation service is asked to satisfy.

use serde::Serialize;

/// One array-of-strings field in the response contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SchemaField {
    /// JSON property name
    name: &'static str,
    /// Description of the array as a whole
    description: &'static str,
    /// Description of a single item
    item_description: &'static str,
}

impl SchemaField {
    const fn new(
        name: &'static str,
        description: &'static str,
        item_description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            item_description,
        }
    }

    /// JSON property name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Description of the array as a whole
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Description of a single item
    pub fn item_description(&self) -> &'static str {
        self.item_description
    }
}

const CAPTIONS: SchemaField = SchemaField::new(
    "captions",
    "An array of 5 unique caption variations.",
    "An engaging social media caption.",
);

const HASHTAGS: SchemaField = SchemaField::new(
    "hashtags",
    "An array of 10-15 relevant hashtags.",
    "A relevant hashtag without the # symbol.",
);

const INSIGHTS: SchemaField = SchemaField::new(
    "insights",
    "An array of exactly 3 actionable insights for boosting engagement.",
    "A short, actionable engagement tip.",
);

/// Object with required `captions` and `hashtags` arrays and, for entitled
/// callers, a required `insights` array.
///
/// # Examples
///
/// ```
/// use captionstudio_core::ResponseSchema;
///
/// let free = ResponseSchema::for_entitlement(false);
/// assert_eq!(free.required(), vec!["captions", "hashtags"]);
///
/// let pro = ResponseSchema::for_entitlement(true);
/// assert_eq!(pro.required(), vec!["captions", "hashtags", "insights"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResponseSchema {
    captions: SchemaField,
    hashtags: SchemaField,
    insights: Option<SchemaField>,
}

impl ResponseSchema {
    /// Contract for a caller with the given entitlement.
    pub fn for_entitlement(is_entitled: bool) -> Self {
        Self {
            captions: CAPTIONS,
            hashtags: HASHTAGS,
            insights: is_entitled.then_some(INSIGHTS),
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &SchemaField> {
        [Some(&self.captions), Some(&self.hashtags), self.insights.as_ref()]
            .into_iter()
            .flatten()
    }

    /// Names of required properties. Every declared field is required.
    pub fn required(&self) -> Vec<&'static str> {
        self.fields().map(|f| f.name).collect()
    }

    /// Whether the contract asks for insights.
    pub fn includes_insights(&self) -> bool {
        self.insights.is_some()
    }
}
