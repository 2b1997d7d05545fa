// self
use crate::obs::{FlowOutcome, FlowStage};

/// Records a login stage outcome via the global metrics recorder (when enabled).
pub fn record_login_outcome(stage: FlowStage, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"studybuddy_auth_login_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
