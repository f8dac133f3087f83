use crate::error::AppError;

/// Default number of questions returned by the suggest_questions tool.
pub const DEFAULT_SUGGESTED_QUESTIONS: usize = 20;
/// Upper bound for any suggestion request, configured or per-call.
pub const MAX_SUGGESTED_QUESTIONS: usize = 50;

/// Application configuration loaded explicitly from environment variables.
///
/// Everything is optional: the knowledge base is compiled in, so the server
/// starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default sample size for the suggest_questions tool.
    pub suggested_question_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SUGGESTED_QUESTIONS`: default suggestion count, 1 to 50
    pub fn from_env() -> Result<Self, AppError> {
        let suggested_question_count = match std::env::var("SUGGESTED_QUESTIONS") {
            Ok(raw) => {
                let count: usize = raw.parse().map_err(|_| {
                    AppError::Config(format!(
                        "SUGGESTED_QUESTIONS must be an integer, got '{raw}'"
                    ))
                })?;
                if count == 0 || count > MAX_SUGGESTED_QUESTIONS {
                    return Err(AppError::Config(format!(
                        "SUGGESTED_QUESTIONS must be between 1 and {MAX_SUGGESTED_QUESTIONS}, got {count}"
                    )));
                }
                count
            }
            Err(_) => DEFAULT_SUGGESTED_QUESTIONS,
        };

        Ok(Self {
            suggested_question_count,
        })
    }
}
