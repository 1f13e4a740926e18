use ocp_core::{Model, Observer, OptimizationProblem};

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Point, Solution,
    bracket::GoldenBracket,
    init::{InitResult, init},
    solution::Status,
};

pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bracket = GoldenBracket::new(bracket);

    let mut state = match init(model, problem, &bracket, &mut observer)? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly => {
            return finish(model, problem, &bracket, Status::StoppedByObserver, 0);
        }
    };

    let mut iters = 0;
    while !state.is_converged(config) {
        if iters == config.max_iters() {
            return finish(model, problem, state.bracket(), Status::MaxIters, iters);
        }

        let step = state.step();
        iters += 1;

        let point = match probe(
            model,
            problem,
            step.x(),
            step.survivor,
            step.bracket.bounds(),
            &mut observer,
        )? {
            Probe::Keep(point) => point,
            Probe::Reject => Point::worse(step.x()),
            Probe::Stop => {
                return finish(
                    model,
                    problem,
                    state.bracket(),
                    Status::StoppedByObserver,
                    iters,
                );
            }
        };

        state.advance(step, point);
    }

    finish(model, problem, state.bracket(), Status::Converged, iters)
}

/// Evaluates the bracket midpoint and builds the solution.
fn finish<M, P>(
    model: &M,
    problem: &P,
    bracket: &GoldenBracket,
    status: Status,
    iters: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [bracket.midpoint()])?;

    Ok(Solution {
        status,
        x: eval.x[0],
        objective: eval.objective,
        snapshot: eval.snapshot,
        bracket: bracket.bounds(),
        iters,
    })
}

/// What to do with a freshly evaluated point.
enum Probe {
    Keep(Point),
    Reject,
    Stop,
}

/// Evaluates `x`, reports it against `other`, and applies the observer's
/// decision.
fn probe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    other: Point,
    bracket: [f64; 2],
    observer: &mut Obs,
) -> Result<Probe, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let (action, point) = match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let point = Point::from(&eval);
            let event = Event::Evaluated {
                point,
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                other,
                bracket,
            };
            (observer.observe(&event), Ok(point))
        }
        Err(err) => (
            Event::emit_failure(x, other, bracket, &err, observer),
            Err(err),
        ),
    };

    match (action, point) {
        (Some(Action::StopEarly), _) => Ok(Probe::Stop),
        (Some(Action::AssumeWorse), _) => Ok(Probe::Reject),
        (None, Ok(point)) => Ok(Probe::Keep(point)),
        (None, Err(err)) => Err(err.into()),
    }
}
