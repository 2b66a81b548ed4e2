//! Role and modifier categories carried by graph edges.
//!
//! [`SemanticType`] labels predicate-argument edges. It covers PropBank
//! roles (what semantic heads are annotated with) as well as the syntactic
//! dependency labels that fall back to plain relations, so one mapping,
//! [`SemanticType::from_label`], serves both.
//!
//! [`AttributeType`] labels modification edges.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Role of an argument with respect to its predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    // PropBank numbered arguments
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,

    // PropBank adjuncts
    Locative,
    Temporal,
    Manner,
    Direction,
    Cause,
    Purpose,
    Extent,
    Discourse,
    Modal,
    Negation,
    Adverbial,

    // Syntactic relations
    Subject,
    PassiveSubject,
    Agent,
    Object,
    IndirectObject,
    PrepositionalObject,
    Complement,
    Modifier,
    Determiner,
    Possessive,
    Number,
    Compound,
    Conjunct,
    Coordination,
    Preposition,
    Marker,
    Particle,
    /// Also the fixed role for modifiers folded into a prepositional object
    Aux,
    Root,
    Punctuation,
    /// Anything the tables do not know
    Dependent,
}

static LABEL_TABLE: Lazy<HashMap<&'static str, SemanticType>> = Lazy::new(|| {
    use SemanticType::*;

    let entries: &[(&str, SemanticType)] = &[
        ("a0", A0),
        ("arg0", A0),
        ("a1", A1),
        ("arg1", A1),
        ("a2", A2),
        ("arg2", A2),
        ("a3", A3),
        ("arg3", A3),
        ("a4", A4),
        ("arg4", A4),
        ("a5", A5),
        ("arg5", A5),
        ("am-loc", Locative),
        ("am-tmp", Temporal),
        ("am-mnr", Manner),
        ("am-dir", Direction),
        ("am-cau", Cause),
        ("am-prp", Purpose),
        ("am-pnc", Purpose),
        ("am-ext", Extent),
        ("am-dis", Discourse),
        ("am-mod", Modal),
        ("am-neg", Negation),
        ("am-adv", Adverbial),
        ("nsubj", Subject),
        ("csubj", Subject),
        ("expl", Subject),
        ("nsubjpass", PassiveSubject),
        ("csubjpass", PassiveSubject),
        ("agent", Agent),
        ("dobj", Object),
        ("obj", Object),
        ("iobj", IndirectObject),
        ("dative", IndirectObject),
        ("pobj", PrepositionalObject),
        ("pcomp", PrepositionalObject),
        ("acomp", Complement),
        ("ccomp", Complement),
        ("xcomp", Complement),
        ("attr", Complement),
        ("oprd", Complement),
        ("amod", Modifier),
        ("advmod", Modifier),
        ("npadvmod", Modifier),
        ("nmod", Modifier),
        ("appos", Modifier),
        ("infmod", Modifier),
        ("partmod", Modifier),
        ("rcmod", Modifier),
        ("relcl", Modifier),
        ("quantmod", Modifier),
        ("advcl", Modifier),
        ("tmod", Modifier),
        ("det", Determiner),
        ("predet", Determiner),
        ("poss", Possessive),
        ("possessive", Possessive),
        ("num", Number),
        ("nummod", Number),
        ("nn", Compound),
        ("compound", Compound),
        ("hmod", Compound),
        ("hyph", Compound),
        ("conj", Conjunct),
        ("cc", Coordination),
        ("preconj", Coordination),
        ("prep", Preposition),
        ("mark", Marker),
        ("complm", Marker),
        ("prt", Particle),
        ("aux", Aux),
        ("auxpass", Aux),
        ("neg", Negation),
        ("root", Root),
        ("punct", Punctuation),
        ("dep", Dependent),
    ];

    entries.iter().copied().collect()
});

impl SemanticType {
    /// Map a dependency or PropBank label to its role. Total: unknown labels
    /// become [`SemanticType::Dependent`].
    ///
    /// Matching ignores case, and the PropBank continuation / reference
    /// prefixes (`C-A1`, `R-AM-LOC`) map to the base role.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_ascii_lowercase();
        let base = lower
            .strip_prefix("c-")
            .or_else(|| lower.strip_prefix("r-"))
            .unwrap_or(lower.as_str());

        LABEL_TABLE
            .get(base)
            .copied()
            .unwrap_or(SemanticType::Dependent)
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        use SemanticType::*;

        match self {
            A0 => "a0",
            A1 => "a1",
            A2 => "a2",
            A3 => "a3",
            A4 => "a4",
            A5 => "a5",
            Locative => "locative",
            Temporal => "temporal",
            Manner => "manner",
            Direction => "direction",
            Cause => "cause",
            Purpose => "purpose",
            Extent => "extent",
            Discourse => "discourse",
            Modal => "modal",
            Negation => "negation",
            Adverbial => "adverbial",
            Subject => "subject",
            PassiveSubject => "passive_subject",
            Agent => "agent",
            Object => "object",
            IndirectObject => "indirect_object",
            PrepositionalObject => "prepositional_object",
            Complement => "complement",
            Modifier => "modifier",
            Determiner => "determiner",
            Possessive => "possessive",
            Number => "number",
            Compound => "compound",
            Conjunct => "conjunct",
            Coordination => "coordination",
            Preposition => "preposition",
            Marker => "marker",
            Particle => "particle",
            Aux => "aux",
            Root => "root",
            Punctuation => "punctuation",
            Dependent => "dependent",
        }
    }

    /// True for the PropBank numbered arguments and adjuncts.
    pub fn is_propbank(&self) -> bool {
        *self <= SemanticType::Adverbial
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a modification edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Generic property; also used for modifiers folded into a prepositional object
    Quality,
    Quantity,
    Possession,
    Negation,
    Time,
    Manner,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Quality => "quality",
            AttributeType::Quantity => "quantity",
            AttributeType::Possession => "possession",
            AttributeType::Negation => "negation",
            AttributeType::Time => "time",
            AttributeType::Manner => "manner",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_dependency_labels() {
        assert_eq!(SemanticType::from_label("nsubj"), SemanticType::Subject);
        assert_eq!(SemanticType::from_label("dobj"), SemanticType::Object);
        assert_eq!(SemanticType::from_label("pobj"), SemanticType::PrepositionalObject);
        assert_eq!(SemanticType::from_label("det"), SemanticType::Determiner);
        assert_eq!(SemanticType::from_label("aux"), SemanticType::Aux);
    }

    #[test]
    fn maps_propbank_labels_ignoring_case() {
        assert_eq!(SemanticType::from_label("A0"), SemanticType::A0);
        assert_eq!(SemanticType::from_label("ARG1"), SemanticType::A1);
        assert_eq!(SemanticType::from_label("AM-LOC"), SemanticType::Locative);
        assert_eq!(SemanticType::from_label("am-tmp"), SemanticType::Temporal);
    }

    #[test]
    fn strips_continuation_and_reference_prefixes() {
        assert_eq!(SemanticType::from_label("C-A1"), SemanticType::A1);
        assert_eq!(SemanticType::from_label("R-AM-LOC"), SemanticType::Locative);
    }

    #[test]
    fn unknown_labels_fall_back_to_dependent() {
        assert_eq!(SemanticType::from_label(""), SemanticType::Dependent);
        assert_eq!(SemanticType::from_label("goeswith"), SemanticType::Dependent);
        assert_eq!(SemanticType::from_label("c-"), SemanticType::Dependent);
    }

    #[test]
    fn propbank_partition() {
        assert!(SemanticType::A0.is_propbank());
        assert!(SemanticType::Adverbial.is_propbank());
        assert!(!SemanticType::Subject.is_propbank());
        assert!(!SemanticType::Aux.is_propbank());
    }

    #[test]
    fn display_matches_serde_names() {
        assert_eq!(SemanticType::PassiveSubject.to_string(), "passive_subject");
        assert_eq!(AttributeType::Quality.to_string(), "quality");
    }
}
