//! Behaviour tests for burnish-syntax.
