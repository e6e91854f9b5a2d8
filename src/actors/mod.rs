mod service_actor;

pub use service_actor::ServiceActor;
