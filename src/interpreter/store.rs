use std::collections::BTreeMap;
use std::fmt::Write;

/// The mutable variable set shared by the statements of one request.
///
/// A store is created empty when a request starts, mutated only by
/// assignment and increment nodes, and cleared once the final snapshot has
/// been taken. No two concurrently-evaluating requests ever share a store
/// instance.
///
/// Names map to signed 64-bit integers; reading a name that was never
/// assigned yields 0 without creating an entry. The ordered map makes the
/// snapshot's lexicographic ordering fall out of plain iteration.
#[derive(Debug, Default)]
pub struct VariableStore {
    variables: BTreeMap<String, i64>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: BTreeMap::new() }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, or 0 if it was never assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.variables.get(name).copied().unwrap_or(0)
    }

    /// Renders the store as the request's observable output.
    ///
    /// Variables appear sorted by name ascending, as
    /// `(name=value,name=value)` with no trailing separator. An empty store
    /// renders as `()`.
    ///
    /// # Example
    /// ```
    /// use batchcalc::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// store.assign("b", 2);
    /// store.assign("a", 1);
    /// assert_eq!(store.snapshot(), "(a=1,b=2)");
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> String {
        let mut out = String::from("(");
        for (i, (name, value)) in self.variables.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{name}={value}");
        }
        out.push(')');
        out
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}
