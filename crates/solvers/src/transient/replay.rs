use framesim_core::Observer;

use super::{Action, Error, Event, Solution, Status};

/// Replays `steps` applications of `advance` starting from `initial`.
///
/// The observer sees the initial state as step 0 and every accepted state
/// after it. Only the latest state is held, so memory use does not grow with
/// the step count.
pub(crate) fn replay<S, F, Obs>(
    initial: S,
    steps: u64,
    mut advance: F,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    F: FnMut(&S) -> Result<S, Error>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let event = Event {
        step: 0,
        state: &initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            state: initial,
            steps: 0,
        });
    }

    let mut current = initial;

    for step in 1..=steps {
        current = advance(&current)?;

        let event = Event {
            step,
            state: &current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                state: current,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        state: current,
        steps,
    })
}
