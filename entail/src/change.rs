//! Rewrite steps that report whether they rewrote anything.

/// `true` if a rewrite step has modified its input.
pub type Change = bool;

/// Rewrite step on values of type `T`.
pub type Step<T> = fn(T) -> (Change, T);

/// Apply a rewrite step to a value as long as the step reports change.
///
/// ~~~
/// use entail::change;
/// let halve = |x: u32| if x % 2 == 0 { (true, x / 2) } else { (false, x) };
/// assert_eq!(change::fix(40, halve), 5);
/// ~~~
pub fn fix<T>(x: T, f: impl Fn(T) -> (Change, T)) -> T {
    let (mut change, mut x) = f(x);
    while change {
        (change, x) = f(x);
    }
    x
}

/// Apply several rewrite steps in sequence.
///
/// Return whether any step has changed the value, and the final value.
pub fn fold<T>(mut x: T, steps: &[Step<T>]) -> (Change, T) {
    let mut change = false;
    for step in steps {
        let (change_step, y) = step(x);
        change |= change_step;
        x = y;
    }
    (change, x)
}
