//! The semantics engine: labelling-based backtracking searches for the preferred and the stable semantics.

mod dispatch;
pub use dispatch::solve_decision_problem;

mod labelling;
pub use labelling::Label;
pub use labelling::Labelling;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod search;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionVerifier;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod utils;
