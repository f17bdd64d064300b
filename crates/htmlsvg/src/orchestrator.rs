use htmlsvg_core::{ClassNameSimulator, Document, PseudoStateSimulator, RenderOptions, SizeRequest};
use htmlsvg_render::{
    ContentSizeCalculator, ForeignObjectSynthesizer, MeasurementError, SvgSynthesizer,
    ValidationError, ViewportSizeCalculator,
};

/// Failure of one render call. Each variant carries the collaborator's error value as it was
/// raised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError<S, M> {
    #[error(transparent)]
    Synthesis(S),
    #[error(transparent)]
    Measurement(M),
}

pub type DefaultRenderError = RenderError<ValidationError, MeasurementError>;

/// Sequences pseudo-state simulation, size calculation and SVG synthesis.
///
/// The document is borrowed mutably for the whole call: simulation writes to it and
/// measurement must observe those writes, so interleaving two calls on one document is ruled
/// out by the borrow. There is no retry, cancellation or timeout; the first failure ends the
/// call.
#[derive(Debug, Clone)]
pub struct RenderOrchestrator<
    P = ClassNameSimulator,
    C = ViewportSizeCalculator,
    S = ForeignObjectSynthesizer,
> {
    simulator: P,
    calculator: C,
    synthesizer: S,
}

impl Default for RenderOrchestrator {
    fn default() -> Self {
        Self {
            simulator: ClassNameSimulator::default(),
            calculator: ViewportSizeCalculator::default(),
            synthesizer: ForeignObjectSynthesizer::default(),
        }
    }
}

impl<P, C, S> RenderOrchestrator<P, C, S> {
    pub fn new(simulator: P, calculator: C, synthesizer: S) -> Self {
        Self {
            simulator,
            calculator,
            synthesizer,
        }
    }

    pub fn with_simulator<P2>(self, simulator: P2) -> RenderOrchestrator<P2, C, S> {
        RenderOrchestrator::new(simulator, self.calculator, self.synthesizer)
    }

    pub fn with_calculator<C2>(self, calculator: C2) -> RenderOrchestrator<P, C2, S> {
        RenderOrchestrator::new(self.simulator, calculator, self.synthesizer)
    }

    pub fn with_synthesizer<S2>(self, synthesizer: S2) -> RenderOrchestrator<P, C, S2> {
        RenderOrchestrator::new(self.simulator, self.calculator, synthesizer)
    }

    pub fn simulator(&self) -> &P {
        &self.simulator
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    pub fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    pub async fn draw_document_as_svg<D>(
        &self,
        document: &mut D,
        options: &RenderOptions,
    ) -> Result<String, RenderError<S::Error, C::Error>>
    where
        D: Document + ?Sized,
        P: PseudoStateSimulator<D>,
        C: ContentSizeCalculator<D>,
        S: SvgSynthesizer<D>,
    {
        if let Some(selector) = options.hover.as_deref() {
            tracing::debug!(selector, "simulating hover");
            self.simulator.fake_hover(document, selector);
        }
        if let Some(selector) = options.active.as_deref() {
            tracing::debug!(selector, "simulating active");
            self.simulator.fake_active(document, selector);
        }

        let request = SizeRequest::from(options);
        tracing::debug!(?request, "measuring document");
        let size = self
            .calculator
            .calculate(document, &request)
            .await
            .map_err(RenderError::Measurement)?;

        tracing::debug!(?size, zoom = ?options.zoom, "synthesizing svg");
        self.synthesizer
            .get_svg_for_document(document, &size, options.zoom_factor())
            .map_err(RenderError::Synthesis)
    }

    /// Drives [`RenderOrchestrator::draw_document_as_svg`] to completion on the current thread.
    pub fn draw_document_as_svg_blocking<D>(
        &self,
        document: &mut D,
        options: &RenderOptions,
    ) -> Result<String, RenderError<S::Error, C::Error>>
    where
        D: Document + ?Sized,
        P: PseudoStateSimulator<D>,
        C: ContentSizeCalculator<D>,
        S: SvgSynthesizer<D>,
    {
        futures::executor::block_on(self.draw_document_as_svg(document, options))
    }
}
