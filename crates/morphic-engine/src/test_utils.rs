//! Hand-written shapes shared by engine tests.
//!
//! These implement [`Source`] and [`Target`] directly, the way generated code
//! does, and record every accessor invocation.

use std::sync::{Arc, Mutex};

use morphic_core::{AccessorDescriptor, ConstructorDescriptor, ParameterDescriptor, Source, Target};

pub const PATRICK_ID: u128 = 0x5eed_0001;
pub const GENERATED_ID: u128 = 0x9e4e_0001;

/// Shared record of accessor invocations, in call order.
#[derive(Clone, Debug, Default)]
pub struct InvocationLog(Arc<Mutex<Vec<&'static str>>>);

impl InvocationLog {
    pub fn record(&self, accessor: &'static str) {
        self.0.lock().unwrap().push(accessor);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, accessor: &str) -> usize {
        self.calls().iter().filter(|&&name| name == accessor).count()
    }
}

#[derive(Clone, Debug)]
pub struct FromRecordOne {
    pub id: u128,
    pub first_name: String,
    pub sur_name: String,
    log: InvocationLog,
}

impl FromRecordOne {
    pub fn new(id: u128, first_name: &str, sur_name: &str, log: &InvocationLog) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            sur_name: sur_name.to_string(),
            log: log.clone(),
        }
    }
}

impl Source for FromRecordOne {
    fn describe_accessors(&self) -> Vec<AccessorDescriptor<'_>> {
        vec![
            AccessorDescriptor::new("id", move || {
                self.log.record("id");
                self.id
            }),
            AccessorDescriptor::new("firstName", move || {
                self.log.record("firstName");
                self.first_name.clone()
            }),
            AccessorDescriptor::new("surName", move || {
                self.log.record("surName");
                self.sur_name.clone()
            }),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct FromRecordTwo {
    pub first_name: String,
    pub sur_name: String,
    log: InvocationLog,
}

impl FromRecordTwo {
    pub fn new(first_name: &str, sur_name: &str, log: &InvocationLog) -> Self {
        Self {
            first_name: first_name.to_string(),
            sur_name: sur_name.to_string(),
            log: log.clone(),
        }
    }
}

impl Source for FromRecordTwo {
    fn describe_accessors(&self) -> Vec<AccessorDescriptor<'_>> {
        vec![
            AccessorDescriptor::new("firstName", move || {
                self.log.record("firstName");
                self.first_name.clone()
            }),
            AccessorDescriptor::new("surName", move || {
                self.log.record("surName");
                self.sur_name.clone()
            }),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct FromRecordThree {
    pub id: u128,
    pub country: String,
    pub sur_name: String,
    log: InvocationLog,
}

impl FromRecordThree {
    pub fn new(id: u128, country: &str, sur_name: &str, log: &InvocationLog) -> Self {
        Self {
            id,
            country: country.to_string(),
            sur_name: sur_name.to_string(),
            log: log.clone(),
        }
    }
}

impl Source for FromRecordThree {
    fn describe_accessors(&self) -> Vec<AccessorDescriptor<'_>> {
        vec![
            AccessorDescriptor::new("id", move || {
                self.log.record("id");
                self.id
            }),
            AccessorDescriptor::new("country", move || {
                self.log.record("country");
                self.country.clone()
            }),
            AccessorDescriptor::new("surName", move || {
                self.log.record("surName");
                self.sur_name.clone()
            }),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordOne {
    pub first_name: String,
    pub sur_name: String,
}

impl Target for ToRecordOne {
    fn describe_constructors() -> Vec<ConstructorDescriptor<Self>> {
        vec![
            ConstructorDescriptor::new(
                "new",
                vec![
                    ParameterDescriptor::of::<String>("firstName"),
                    ParameterDescriptor::of::<String>("surName"),
                ],
                |args| {
                    Ok(Self {
                        first_name: args.take()?,
                        sur_name: args.take()?,
                    })
                },
            )
            .primary(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordTwo {
    pub sur_name: String,
}

impl Target for ToRecordTwo {
    fn describe_constructors() -> Vec<ConstructorDescriptor<Self>> {
        vec![
            ConstructorDescriptor::new(
                "new",
                vec![ParameterDescriptor::of::<String>("surName")],
                |args| {
                    Ok(Self {
                        sur_name: args.take()?,
                    })
                },
            )
            .primary(),
        ]
    }
}

/// Three constructors: the primary one, one generating the id, and one
/// defaulting the first name to `"Eva"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToRecordThree {
    pub id: u128,
    pub first_name: String,
    pub sur_name: String,
}

impl ToRecordThree {
    pub fn new(id: u128, first_name: String, sur_name: String) -> Self {
        Self {
            id,
            first_name,
            sur_name,
        }
    }

    pub fn from_names(first_name: String, sur_name: String) -> Self {
        Self::new(GENERATED_ID, first_name, sur_name)
    }

    pub fn with_sur_name(id: u128, sur_name: String) -> Self {
        Self::new(id, "Eva".to_string(), sur_name)
    }
}

impl Target for ToRecordThree {
    fn describe_constructors() -> Vec<ConstructorDescriptor<Self>> {
        vec![
            ConstructorDescriptor::new(
                "new",
                vec![
                    ParameterDescriptor::of::<u128>("id"),
                    ParameterDescriptor::of::<String>("firstName"),
                    ParameterDescriptor::of::<String>("surName"),
                ],
                |args| Ok(Self::new(args.take()?, args.take()?, args.take()?)),
            )
            .primary(),
            ConstructorDescriptor::new(
                "from_names",
                vec![
                    ParameterDescriptor::of::<String>("firstName"),
                    ParameterDescriptor::of::<String>("surName"),
                ],
                |args| Ok(Self::from_names(args.take()?, args.take()?)),
            ),
            ConstructorDescriptor::new(
                "with_sur_name",
                vec![
                    ParameterDescriptor::of::<u128>("id"),
                    ParameterDescriptor::of::<String>("surName"),
                ],
                |args| Ok(Self::with_sur_name(args.take()?, args.take()?)),
            ),
        ]
    }
}
