//! Reducer for the counter container.

use crate::store::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                value: state.value + state.step,
                ..state
            },
            CounterIntent::Decrement => CounterState {
                value: state.value - state.step,
                ..state
            },
            CounterIntent::Reset => CounterState { value: 0, ..state },
            CounterIntent::SetStep(step) => CounterState { step, ..state },
            CounterIntent::IncrementByAmount(amount) => CounterState {
                value: state.value + amount,
                ..state
            },
        }
    }
}
