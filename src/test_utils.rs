use std::{cell::Cell, ops::ControlFlow};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Reducer, reduce};

/// An error returned when a driving route of the reducer is not satisfied.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect accumulator produced by the reducer.
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_method(self, name: &'static str) -> OfMethod {
        OfMethod {
            name,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfMethod {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfMethod> for TestCaseError {
    fn from(OfMethod { name, pred_error }: OfMethod) -> Self {
        Self::Fail(format!("`{name}()` is implemented incorrectly: {pred_error:?}").into())
    }
}

/// Drives a reducer through every route and checks each outcome with `pred`:
///
/// - `try_step()` in a loop, stopping at the first `Break`.
/// - `step_many()`.
/// - the [`reduce()`] driver.
/// - `step()` in a plain fold, only if the reducer is not expected to stop,
///   since `step()` cannot signal a stop.
///
/// `pred` receives the final accumulator and what is left of the source.
pub fn test_reducer<I, R, C>(
    mut iter_factory: impl FnMut() -> I,
    mut reducer_factory: impl FnMut() -> R,
    mut init_factory: impl FnMut() -> C,
    should_break: bool,
    mut pred: impl FnMut(C, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
) -> TestCaseResult
where
    I: Iterator,
    R: Reducer<C, I::Item>,
{
    // `try_step()`
    {
        let reducer = reducer_factory();
        let mut iter = iter_factory();
        let mut acc = init_factory();
        let mut has_stopped = false;

        for item in iter.by_ref() {
            match reducer.try_step(acc, item) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(last) => {
                    acc = last;
                    has_stopped = true;
                    break;
                }
            }
        }

        prop_assert_eq!(
            has_stopped,
            should_break,
            "`try_step()` didn't break correctly"
        );
        pred(acc, &mut iter).map_err(|e| e.of_method("try_step"))?;
    }

    // `step_many()`
    {
        let reducer = reducer_factory();
        let mut iter = iter_factory();
        let (has_stopped, acc) = match reducer.step_many(init_factory(), &mut iter) {
            ControlFlow::Continue(acc) => (false, acc),
            ControlFlow::Break(acc) => (true, acc),
        };

        prop_assert_eq!(
            has_stopped,
            should_break,
            "`step_many()` didn't break correctly"
        );
        pred(acc, &mut iter).map_err(|e| e.of_method("step_many"))?;
    }

    // `reduce()`
    {
        let reducer = reducer_factory();
        let mut iter = iter_factory();
        let acc = reduce(&mut iter, init_factory(), &reducer);
        pred(acc, &mut iter).map_err(|e| e.of_method("reduce"))?;
    }

    // `step()`
    if !should_break {
        let reducer = reducer_factory();
        let mut iter = iter_factory();
        let acc = iter
            .by_ref()
            .fold(init_factory(), |acc, item| reducer.step(acc, item));
        pred(acc, &mut iter).map_err(|e| e.of_method("step"))?;
    }

    Ok(())
}

/// A reducer that counts how many times it is reached before
/// forwarding to the wrapped one.
#[derive(Debug)]
pub struct Tally<'a, R> {
    calls: &'a Cell<usize>,
    reducer: R,
}

impl<'a, R> Tally<'a, R> {
    pub fn new(calls: &'a Cell<usize>, reducer: R) -> Self {
        Self { calls, reducer }
    }
}

impl<C, T, R> Reducer<C, T> for Tally<'_, R>
where
    R: Reducer<C, T>,
{
    fn step(&self, acc: C, item: T) -> C {
        self.calls.set(self.calls.get() + 1);
        self.reducer.step(acc, item)
    }

    fn try_step(&self, acc: C, item: T) -> ControlFlow<C, C> {
        self.calls.set(self.calls.get() + 1);
        self.reducer.try_step(acc, item)
    }
}

/// Wraps an iterator so that every item it yields is counted.
pub fn counted<'a, I>(iter: I, visits: &'a Cell<usize>) -> impl Iterator<Item = I::Item> + 'a
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    iter.into_iter()
        .inspect(move |_| visits.set(visits.get() + 1))
}
