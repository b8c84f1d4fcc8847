use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

thread_local! {
    static EFFECTS: RefCell<HashMap<usize, Box<dyn Fn()>>> = RefCell::new(HashMap::new());
    static NEXT_EFFECT_ID: RefCell<usize> = const { RefCell::new(0) };
    static RUNNING_EFFECT: RefCell<Option<usize>> = const { RefCell::new(None) };
}

/// A reactive value holder.
///
/// Reading through [`Signal::get`] while an effect is running subscribes
/// that effect to the signal, and every later [`Signal::set`] or
/// [`Signal::update`] re-runs it. This is the mechanism that replaces a
/// framework change-detection pass: "input changed" is an explicit
/// notification from the signal to its subscribers.
#[derive(Clone)]
pub struct Signal<T: 'static + Clone> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<HashSet<usize>>>,
}

impl<T: 'static + Clone> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    /// Current value. Subscribes the running effect, if any.
    pub fn get(&self) -> T {
        RUNNING_EFFECT.with(|current| {
            if let Some(effect_id) = *current.borrow() {
                self.subscribe_effect(effect_id);
            }
        });

        self.value.borrow().clone()
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<F: FnOnce(&T) -> T>(&self, f: F) {
        let new_value = f(&self.value.borrow());
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    fn notify(&self) {
        // Snapshot first: an effect may subscribe while we iterate.
        let subscribers = self.subscribers.borrow().clone();

        for id in subscribers {
            run_effect_by_id(id);
        }
    }

    pub fn subscribe_effect(&self, effect_id: usize) {
        self.subscribers.borrow_mut().insert(effect_id);
    }

    /// A signal that always holds `f` applied to this signal's value.
    pub fn derive<U: 'static + Clone, F: Fn(&T) -> U + 'static>(&self, f: F) -> Signal<U> {
        let derived = Signal::new(f(&self.value.borrow()));
        let source = self.clone();
        let target = derived.clone();

        let effect_id = register_effect(move || {
            target.set(f(&source.get()));
        });

        // First tracked run records the subscription on the source.
        run_tracked(effect_id);

        derived
    }
}

impl From<&str> for Signal<String> {
    fn from(s: &str) -> Self {
        Signal::new(s.to_owned())
    }
}

impl From<String> for Signal<String> {
    fn from(s: String) -> Self {
        Signal::new(s)
    }
}

impl<T: Clone + fmt::Display + 'static> fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.value.borrow()).finish()
    }
}

/// Store an effect and hand back its id. The effect does not run and is not
/// subscribed to anything yet; see [`run_tracked`].
pub fn register_effect<F: Fn() + 'static>(f: F) -> usize {
    let id = NEXT_EFFECT_ID.with(|counter| {
        let mut c = counter.borrow_mut();
        *c += 1;
        *c
    });

    EFFECTS.with(|effects| {
        effects.borrow_mut().insert(id, Box::new(f));
    });

    id
}

/// Run a registered effect with subscription tracking: every signal it
/// reads during this run subscribes it for future notifications.
pub fn run_tracked(effect_id: usize) {
    RUNNING_EFFECT.with(|current| {
        *current.borrow_mut() = Some(effect_id);
    });

    run_effect_by_id(effect_id);

    RUNNING_EFFECT.with(|current| {
        *current.borrow_mut() = None;
    });
}

/// Run a registered effect without tracking.
pub fn run_effect_by_id(effect_id: usize) {
    EFFECTS.with(|effects| {
        if let Some(effect) = effects.borrow().get(&effect_id) {
            (effect)();
        }
    });
}

/// Macro for ergonomic signal creation: signal!(value)
#[macro_export]
macro_rules! signal {
    ($val:expr) => {
        $crate::signal::Signal::new($val)
    };
}

/// Macro for creating effects with automatic signal subscription
#[macro_export]
macro_rules! effect {
    ($body:expr) => {{
        let effect_fn = move || $body;

        let effect_id = $crate::signal::register_effect(effect_fn);

        // Run once with tracking to establish the initial subscriptions
        $crate::signal::run_tracked(effect_id);
    }};
}

/// Macro for creating derived signals from other signals
#[macro_export]
macro_rules! derive {
    ( $($sig:ident),+ , $body:block ) => {{
        $(let $sig = $sig.clone();)+
        let derived_signal = Signal::new(Default::default());
        let derived_signal_clone = derived_signal.clone();

        $crate::effect!({
            derived_signal_clone.set($body);
        });

        derived_signal
    }};
}
