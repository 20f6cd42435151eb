/// Declare an envelope record whose ABI layout is its field list.
///
/// Fields are encoded in declaration order. The record is static, and is
/// inlined into its parent's head, only when every field is static.
macro_rules! abi_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )+
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl $crate::abi::AbiType for $name {
            const DYNAMIC: bool = false $(|| <$ty as $crate::abi::AbiType>::DYNAMIC)+;
            const HEAD_SIZE: usize = if Self::DYNAMIC {
                $crate::abi::WORD_SIZE
            } else {
                0 $(+ <$ty as $crate::abi::AbiType>::HEAD_SIZE)+
            };

            fn param_type() -> $crate::abi::ParamType {
                $crate::abi::ParamType::Tuple(vec![
                    $(<$ty as $crate::abi::AbiType>::param_type()),+
                ])
            }

            fn encoded_size(&self) -> usize {
                let mut fields = $crate::abi::RecordEncoder::new();
                $(fields.push(&self.$field);)+
                fields.encoded_size()
            }

            fn encode_body(&self, out: &mut Vec<u8>) {
                let mut fields = $crate::abi::RecordEncoder::new();
                $(fields.push(&self.$field);)+
                fields.write_to(out);
            }

            fn decode_body(data: &[u8]) -> Result<Self, $crate::abi::CodecError> {
                let mut fields = $crate::abi::RecordDecoder::new(data);
                Ok(Self {
                    $($field: fields.next()?,)+
                })
            }
        }

        impl $crate::verify::Randomize for $name {
            fn randomize<R: ::rand::Rng>(
                &mut self,
                rng: &mut R,
                limits: &$crate::verify::Limits,
            ) {
                $($crate::verify::Randomize::randomize(&mut self.$field, rng, limits);)+
            }
        }
    };
}
