//! The `QueryState` facade: typed params in, one navigation call out.

use qsync_codec::{decode, encode, format_query};
use qsync_model::field::Schema;
use qsync_model::query::QueryMap;
use qsync_model::state::TypedState;
use qsync_model::update::{Update, UpdateValue};

use crate::navigator::{DispatchOptions, NavError, Navigator};

/// Binds a schema to a navigator and exposes the read/write state API.
///
/// Reads decode the navigator's current snapshot (cached until the snapshot
/// changes); writes compute the minimal delta against the field defaults and
/// issue exactly one navigation call.
pub struct QueryState<'a, N: Navigator> {
    schema: &'a Schema,
    navigator: N,
    options: DispatchOptions,
    decoded: Option<(QueryMap, TypedState)>,
}

impl<'a, N: Navigator> QueryState<'a, N> {
    pub fn new(schema: &'a Schema, navigator: N) -> QueryState<'a, N> {
        QueryState::with_options(schema, navigator, DispatchOptions::default())
    }

    pub fn with_options(
        schema: &'a Schema,
        navigator: N,
        options: DispatchOptions,
    ) -> QueryState<'a, N> {
        QueryState {
            schema,
            navigator,
            options,
            decoded: None,
        }
    }

    /// The decoded typed state for the current location. Re-decodes only
    /// when the underlying snapshot has changed.
    pub fn params(&mut self) -> &TypedState {
        let snapshot = self.navigator.current().clone();
        let stale = self
            .decoded
            .as_ref()
            .is_none_or(|(cached, _)| cached != &snapshot);
        if stale {
            let state = decode(self.schema, &snapshot);
            self.decoded = Some((snapshot, state));
        }
        &self
            .decoded
            .as_ref()
            .expect("decoded state populated above")
            .1
    }

    /// Applies a partial update: coerce, diff against defaults, merge into
    /// the current snapshot, and dispatch one navigation call with the
    /// configured history mode and transition options.
    pub fn set_params(&mut self, update: &Update) -> Result<(), NavError> {
        for name in update.keys() {
            if !self.schema.contains(name) {
                return Err(NavError::UnknownField(name.to_string()));
            }
        }
        let next = encode(self.schema, self.navigator.current(), update);
        self.navigator
            .navigate(next, self.options.mode, &self.options.transition)
    }

    /// Single-field convenience over [`set_params`](Self::set_params), with
    /// identical diff and dispatch semantics.
    pub fn set_param(
        &mut self,
        name: &str,
        value: impl Into<UpdateValue>,
    ) -> Result<(), NavError> {
        self.set_params(&Update::new().set(name, value))
    }

    /// The snapshot `set_params` would navigate to, without navigating.
    /// Useful for building links.
    pub fn project(&self, update: &Update) -> QueryMap {
        encode(self.schema, self.navigator.current(), update)
    }

    /// [`project`](Self::project) rendered as an href query component:
    /// `?key=value&...`, or `?` when every field sits at its default.
    pub fn href(&self, update: &Update) -> String {
        format!("?{}", format_query(&self.project(update)))
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}
