/// Domain layer - core business models and decision logic
///
/// Everything here is a pure function of its inputs; the only I/O is the
/// catalog's one-time description-cache load and the document listing it
/// delegates to its port.
pub mod catalog;
pub mod classifier;
pub mod composer;
pub mod models;
pub mod ranker;
pub mod router;
pub mod scoring;
pub mod templates;

pub use catalog::DocumentCatalog;
pub use classifier::ObjectionClassifier;
pub use composer::FollowupComposer;
pub use models::{
    AnalysisPayload, FollowupPlan, FollowupStage, MeetingRecord, ObjectionCategory,
    ReferenceDocument, Sector,
};
pub use ranker::RelevanceRanker;
pub use router::SectorRouter;
pub use scoring::{ScoreAggregator, WeightedSnapshot};
pub use templates::FollowupTemplates;
