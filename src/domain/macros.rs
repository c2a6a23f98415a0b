/// Generates a getter and a setter for every listed field of a record.
///
/// Kinds:
/// - `text`: `String` field, borrowed as `&str`, set from anything `Into<String>`;
/// - `optional_text`: `Option<String>` field, borrowed as `Option<&str>`;
/// - `number`: `Copy` integer field.
#[macro_export]
macro_rules! accessors {
    ($record:ident, $($kind:ident $field:ident: $setter:ident),* $(,)?) => {
        impl $record {
            $( $crate::accessors!(@$kind $field, $setter); )*
        }
    };
    (@text $field:ident, $setter:ident) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }

        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = value.into();
        }
    };
    (@optional_text $field:ident, $setter:ident) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        pub fn $setter(&mut self, value: Option<String>) {
            self.$field = value;
        }
    };
    (@number $field:ident, $setter:ident) => {
        pub fn $field(&self) -> i32 {
            self.$field
        }

        pub fn $setter(&mut self, value: i32) {
            self.$field = value;
        }
    };
}
