#[macro_export]
macro_rules! assert_eq_unordered {
    ($actual:expr, $expect:expr) => {
        let mut vals = std::collections::HashSet::new();

        for val in $actual {
            assert!(vals.insert(val));
        }

        for val in $expect {
            assert!(vals.remove(val), "`{:#?}` missing", val);
        }

        assert!(vals.is_empty());
    };
}

/// Implements `Persistent` for a struct with an `identity` field and a
/// `Members` implementation.
#[macro_export]
macro_rules! persistent {
    ($ty:ty, $info:expr) => {
        impl tenon::Persistent for $ty {
            fn type_info(&self) -> &'static tenon::TypeInfo {
                &$info
            }

            fn identity(&self) -> &tenon::Identity {
                &self.identity
            }

            fn identity_mut(&mut self) -> &mut tenon::Identity {
                &mut self.identity
            }

            fn store_members(&self, state: &mut tenon::ObjectState) {
                $crate::models::Members::store(self, state)
            }

            fn restore_members(&mut self, state: &tenon::ObjectState) -> tenon::Result<()> {
                $crate::models::Members::restore(self, state)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
                self
            }
        }
    };
}
