use crate::config::SUPPRESS_THRESHOLD;
use rand::Rng;

/// Decides whether this run reports its result. The optimizer is expected to
/// cope with runs that print nothing.
pub trait EmitGate {
    /// A uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64;

    fn should_emit(&mut self) -> bool {
        self.draw() > SUPPRESS_THRESHOLD
    }
}

/// Fresh draw per invocation from the thread-local generator.
pub struct RandomGate<R: Rng> {
    rng: R,
}

impl RandomGate<rand::rngs::ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> RandomGate<R> {
    #[cfg(test)]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> EmitGate for RandomGate<R> {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

#[cfg(test)]
pub struct FixedGate(pub f64);

#[cfg(test)]
impl EmitGate for FixedGate {
    fn draw(&mut self) -> f64 {
        self.0
    }
}
