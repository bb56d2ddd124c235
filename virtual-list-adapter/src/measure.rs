/// Reads the rendered height of a mounted item view.
///
/// Returns `None` when the view has no layout yet (detached, hidden, not laid out). Such
/// views are skipped for the batch rather than recorded as zero-height.
pub trait Measure<H> {
    fn measure(&mut self, handle: &H) -> Option<u32>;
}

impl<H, F> Measure<H> for F
where
    F: FnMut(&H) -> Option<u32>,
{
    fn measure(&mut self, handle: &H) -> Option<u32> {
        self(handle)
    }
}
