mod adjustment;
mod collaborator;
mod event;
mod habit;
mod insight;
mod period;
mod snapshot;
mod time_of_day;

pub use adjustment::{
    AdjustmentRecord, AdjustmentType, DecliningPattern, ImplementationEffort,
    ImprovementOpportunity, OptimizationSuggestion, PerformanceAnalysis, SystemAdjustment,
};
pub use collaborator::{
    DailyActivityStats, EveningReview, LearningStyle, Profile, ReviewAnalysis, ReviewHistory,
};
pub use event::{
    BehavioralEvent, ContextualFactors, EnvironmentFactors, EventContext, EventPayload, EventType,
    HabitCompletion, ProductivityMetrics, RoutineModification, SkipPattern, SuggestionResponse,
    TaskCompletion, UserInteraction,
};
pub use habit::{
    CompletionQuality, ConsistencyScore, Habit, HabitCompletionRecord, HabitScore,
    HabitStreakState, StackSuggestion,
};
pub use insight::{Insight, InsightCategory, Trend};
pub use period::{DateWindow, Period};
pub use snapshot::{
    AnalyticsSnapshot, DistractionPattern, EnergyPoint, EnvironmentalPreferences,
    PersonalizationInsights, PersonalizationMetrics, ProductivityPattern,
};
pub use time_of_day::TimeOfDay;
