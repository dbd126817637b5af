use crate::core::errors::FilterStoreError;

/// Combinational reaction trait for stateless component logic
///
/// Implementors look at the current tick's snapshot (`ctx`) and produce an
/// optional drive value. `None` means the component drives nothing this tick.
pub trait React<Ctx = ()> {
    type Output;

    /// Execute the component's logic and return optional output
    fn react(&mut self, ctx: Ctx) -> Option<Self::Output>;
}

/// Register update trait for stateful components
///
/// `cycle` is called exactly once per tick, after every combinational value
/// for that tick has been computed from the snapshot. It commits the next
/// state and returns the registered output.
pub trait Cycle {
    type Input;
    type Output;

    /// Commit the next state from this tick's inputs
    fn cycle(&mut self, input: &Self::Input) -> Result<Self::Output, FilterStoreError>;
}
