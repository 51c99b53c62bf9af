use crate::types::Point2;

/// A pair of point arrays the iteration driver alternates between.
///
/// This buffer stores:
///
/// - The **current** generation: the complete output of the last pass.
/// - The **next** generation: scratch storage the following pass writes into.
///
/// After a pass fills `next`, [`GenerationBuffers::advance`] swaps the two,
/// so the next pass reuses the allocation of the generation before the
/// current one instead of asking the allocator for a new array.
///
/// Exactly one of the two arrays is readable at any time; the other is
/// only ever handed out mutably, so generations never alias.
#[derive(Debug, Default)]
pub struct GenerationBuffers {
    /// Completed generation.
    current: Vec<Point2>,
    /// Scratch for the generation being built.
    next: Vec<Point2>,
    /// Number of completed swaps.
    generation: u32,
}

impl GenerationBuffers {
    /// Creates buffers whose current generation is a copy of `seed`.
    ///
    /// ### Parameters
    /// - `seed` - Points of generation 0.
    ///
    /// ### Returns
    /// New [`GenerationBuffers`] with an empty `next` array.
    pub fn seeded(seed: &[Point2]) -> Self {
        Self {
            current: seed.to_vec(),
            next: Vec::new(),
            generation: 0,
        }
    }

    /// Reserves room for the last two generations of a run.
    ///
    /// Buffers alternate, so the array holding the final generation and
    /// the one holding the generation before it each need their own
    /// capacity. Reserving both up front means no pass reallocates.
    ///
    /// ### Parameters
    /// - `final_len` - Point count of the last generation.
    /// - `previous_len` - Point count of the generation before it.
    /// - `passes` - Number of swaps still to come; decides which array
    ///   ends up holding the final generation.
    pub fn reserve_for(&mut self, final_len: usize, previous_len: usize, passes: u32) {
        let (for_final, for_previous) = if passes % 2 == 0 {
            (&mut self.current, &mut self.next)
        } else {
            (&mut self.next, &mut self.current)
        };
        for_final.reserve(final_len.saturating_sub(for_final.len()));
        for_previous.reserve(previous_len.saturating_sub(for_previous.len()));
    }

    /// Returns the completed generation together with the scratch array.
    #[inline]
    pub fn split(&mut self) -> (&[Point2], &mut Vec<Point2>) {
        (&self.current, &mut self.next)
    }

    /// Promotes the scratch array to the current generation.
    ///
    /// The old current generation becomes scratch and is cleared so that
    /// none of its points can leak into the next pass.
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
        self.generation += 1;
    }

    pub fn current(&self) -> &[Point2] {
        &self.current
    }

    /// Number of times [`GenerationBuffers::advance`] has run.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Consumes the buffers and returns the current generation.
    ///
    /// The scratch array is dropped here.
    pub fn into_current(self) -> Vec<Point2> {
        self.current
    }
}
