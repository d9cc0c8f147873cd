//! Quiz validation configuration from TOML (`[quiz]` section)

use quizgen_domain::CountPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// How strictly the number of returned questions is checked
    pub question_count_policy: CountPolicy,
}
