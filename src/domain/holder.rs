/// Pairs two externally owned collaborators and hands them back unchanged.
///
/// Mirrors the `Test` fixture class under `tests/fixtures/src/Test.php`.
/// Fields are private and there are no setters, so a holder never changes
/// after `new`. Wrap the collaborators in `Arc` when several holders must
/// point at the same instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder<B, F> {
    bar: B,
    foo: F,
}

impl<B, F> Holder<B, F> {
    pub fn new(bar: B, foo: F) -> Self {
        Self { bar, foo }
    }

    pub fn bar(&self) -> &B {
        &self.bar
    }

    pub fn foo(&self) -> &F {
        &self.foo
    }
}
