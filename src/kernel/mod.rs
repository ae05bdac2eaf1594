//! Headless editor core (sessions, panel state, command dispatch).

pub mod action;
pub mod binding;
pub mod dispatcher;
pub mod effect;
pub mod lifecycle;
pub mod panel;
pub mod services;
pub mod session;
pub mod view;
pub mod workbench;

pub use action::PanelAction;
pub use binding::{strip_data_url, BindingError, DocumentBinding, LoadOutcome};
pub use dispatcher::{DispatchError, DispatchOutcome, OperationDispatcher};
pub use effect::Effect;
pub use lifecycle::{LifecycleCallbacks, MountHook, MountedView, WidgetLifecycleManager};
pub use panel::{DrawState, FilterPreset, Operator, OperatorPanelController, PanelResult};
pub use session::{CropState, RestoreEntry, Session, SessionRegistry, FACTORY_NAME};
pub use view::{Appearance, Control, ControlKind, PanelBody, PanelView, PLACEHOLDER};
pub use workbench::Workbench;
