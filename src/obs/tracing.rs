// self
use crate::{_prelude::*, auth::ProviderId, obs::FlowStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// Stage-tagged span wrapping one orchestrator operation.
///
/// Login initiation is synchronous and runs inside [`FlowSpan::in_scope`]; the
/// callback and exchange stages await the transport, so they attach the span with
/// [`FlowSpan::instrument`] instead of holding an entered guard across `.await`.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span tagged with the provided stage + call site.
	pub fn new(stage: FlowStage, op: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("studybuddy_auth.flow", stage = stage.as_str(), op);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, op);

			Self {}
		}
	}

	/// Runs a synchronous section inside the span.
	pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Attaches the span to an async section.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a stage failure with provider context (when tracing is enabled).
///
/// Only the error's `Display` rendering is emitted; the crate's error taxonomy keeps
/// secrets and raw provider bodies out of that rendering by construction.
pub fn log_flow_failure(stage: FlowStage, provider: &ProviderId, error: &Error) {
	#[cfg(feature = "tracing")]
	tracing::warn!(
		stage = stage.as_str(),
		provider = provider.as_ref(),
		%error,
		"Login flow stage failed.",
	);
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, provider, error);
	}
}
