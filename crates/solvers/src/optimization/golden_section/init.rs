use ocp_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::evaluate;

use super::{Action, Error, Event, Point, bracket::GoldenBracket, state::State};

pub(super) enum InitResult {
    Continue(State),
    StopEarly,
}

/// Evaluates both interior points of `bracket` and builds the initial state.
///
/// The observer hears about one of the two points only, reported against the
/// other as `other`. When exactly one evaluation fails, the failed point is
/// the one reported. When both fail there is nothing to compare against, so
/// the observer is notified of the first failure (with a NaN `other`) and its
/// error is returned regardless of the action.
pub(super) fn init<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: &GoldenBracket,
    observer: &mut Obs,
) -> Result<InitResult, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = bracket.bounds();
    let xs = [bracket.inner_left, bracket.inner_right];
    let [first, second] = xs.map(|x| evaluate(model, problem, [x]));

    let (known, x, pending) = match (first, second) {
        (Ok(first), second) => (Point::from(&first), xs[1], second),
        (Err(err), Ok(second)) => (Point::from(&second), xs[0], Err(err)),
        (Err(err), Err(_)) => {
            let unknown = Point::new(xs[1], f64::NAN);
            Event::emit_failure(xs[0], unknown, bounds, &err, observer);
            return Err(err.into());
        }
    };

    let action = match &pending {
        Ok(eval) => {
            let event = Event::Evaluated {
                point: Point::from(eval),
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                other: known,
                bracket: bounds,
            };
            observer.observe(&event)
        }
        Err(err) => Event::emit_failure(x, known, bounds, err, observer),
    };

    let reported = match (action, pending) {
        (Some(Action::StopEarly), _) => return Ok(InitResult::StopEarly),
        (Some(Action::AssumeWorse), _) => Point::worse(x),
        (None, Ok(eval)) => Point::from(&eval),
        (None, Err(err)) => return Err(err.into()),
    };

    let (left, right) = if known.x < reported.x {
        (known, reported)
    } else {
        (reported, known)
    };
    Ok(InitResult::Continue(State::new(*bracket, left, right)))
}
