/// Owner of the modal lifecycle around a bulk action dialog.
///
/// The dialog calls [`DialogHost::close_dialog`] exactly once, when it is
/// dismissed by the operator or closes itself after a clean run.
pub trait DialogHost: Send + Sync {
    fn close_dialog(&self);
}

/// Host for headless use; closing does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl DialogHost for NoopHost {
    #[inline(always)]
    fn close_dialog(&self) {}
}
