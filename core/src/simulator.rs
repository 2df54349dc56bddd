//! An in-memory **simulated DUT**.
//!
//! Implements every device port from a [`Topology`], so the checks can run
//! without lab hardware. Interfaces settle on the oper status matching their
//! admin state after the topology's settle time, and transceivers linked to a
//! disabled interface report their dark output power.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, info};

use optics_common::{
    device::{
        component::ComponentType,
        interface::{InterfaceConfig, OperStatus},
        vendor::Vendor,
    },
    error::OpticsError,
    ports::{ComponentTelemetry, Device, InterfaceConfigurator, InterfaceTelemetry},
};

pub mod topology;

use topology::{ChannelSpec, ComponentSpec, Topology};

pub struct SimulatedDut {
    name: String,
    model: String,
    vendor: Vendor,
    ports: BTreeMap<String, String>,
    components: Vec<ComponentSpec>,
    settle_time: Duration,
    interfaces: Mutex<HashMap<String, InterfaceState>>,
}

#[derive(Debug, Clone, Copy)]
struct InterfaceState {
    enabled: bool,
    /// Status reported until the settle time since `changed_at` has passed.
    previous: OperStatus,
    /// Last admin state change, `None` while the boot state is untouched.
    changed_at: Option<Instant>,
}

impl InterfaceState {
    fn settled_status(&self) -> OperStatus {
        if self.enabled {
            OperStatus::Up
        } else {
            OperStatus::Down
        }
    }

    fn status_at(&self, now: Instant, settle_time: Duration) -> OperStatus {
        match self.changed_at {
            Some(changed_at) if now.duration_since(changed_at) < settle_time => self.previous,
            _ => self.settled_status(),
        }
    }
}

impl SimulatedDut {
    pub fn new(topology: Topology) -> Self {
        let settle_time = Duration::from_millis(topology.settle_time_ms);
        let interfaces = topology
            .interfaces
            .iter()
            .map(|intf| {
                let state = InterfaceState {
                    enabled: intf.enabled,
                    previous: OperStatus::Down,
                    changed_at: None,
                };
                (intf.name.clone(), state)
            })
            .collect();

        Self {
            name: topology.name,
            model: topology.model,
            vendor: topology.vendor,
            ports: topology.ports,
            components: topology.components,
            settle_time,
            interfaces: Mutex::new(interfaces),
        }
    }

    fn lock_interfaces(&self) -> Result<MutexGuard<'_, HashMap<String, InterfaceState>>, OpticsError> {
        self.interfaces
            .lock()
            .map_err(|_| OpticsError::Telemetry(anyhow::anyhow!("simulated interface state is poisoned")))
    }

    fn component(&self, name: &str) -> Result<&ComponentSpec, OpticsError> {
        self.components
            .iter()
            .find(|component| component.name == name)
            .ok_or_else(|| OpticsError::UnknownComponent(name.to_string()))
    }

    /// Whether the laser of `component` is dark because its interface is admin down.
    fn laser_off(&self, component: &ComponentSpec) -> Result<bool, OpticsError> {
        let Some(interface) = &component.interface else {
            return Ok(false);
        };
        let interfaces = self.lock_interfaces()?;
        let state = interfaces
            .get(interface)
            .ok_or_else(|| OpticsError::UnknownInterface(interface.clone()))?;
        Ok(!state.enabled)
    }

    fn channel_samples(
        &self,
        component: &str,
        leaf: impl Fn(&ChannelSpec) -> Option<f64>,
    ) -> Result<Vec<f64>, OpticsError> {
        let samples = self
            .component(component)?
            .channels
            .iter()
            .filter_map(leaf)
            .collect();
        Ok(samples)
    }
}

impl Device for SimulatedDut {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn vendor(&self) -> Vendor {
        self.vendor
    }

    fn port(&self, id: &str) -> Result<String, OpticsError> {
        self.ports
            .get(id)
            .cloned()
            .ok_or_else(|| OpticsError::UnknownPort(id.to_string()))
    }
}

#[async_trait]
impl ComponentTelemetry for SimulatedDut {
    async fn find_components_by_type(&self, kind: ComponentType) -> Result<Vec<String>, OpticsError> {
        Ok(self
            .components
            .iter()
            .filter(|component| component.kind == kind)
            .map(|component| component.name.clone())
            .collect())
    }

    async fn lookup_mfg_name(&self, component: &str) -> Result<Option<String>, OpticsError> {
        Ok(self.component(component)?.mfg_name.clone())
    }

    async fn input_powers(&self, component: &str) -> Result<Vec<f64>, OpticsError> {
        self.channel_samples(component, |channel| channel.input_power)
    }

    async fn output_powers(&self, component: &str) -> Result<Vec<f64>, OpticsError> {
        let spec = self.component(component)?;
        if self.laser_off(spec)? {
            let dark = spec.dark_output_power;
            return self.channel_samples(component, |channel| channel.output_power.map(|_| dark));
        }
        self.channel_samples(component, |channel| channel.output_power)
    }

    async fn laser_bias_currents(&self, component: &str) -> Result<Vec<f64>, OpticsError> {
        self.channel_samples(component, |channel| channel.laser_bias_current)
    }
}

#[async_trait]
impl InterfaceTelemetry for SimulatedDut {
    async fn oper_status(&self, interface: &str) -> Result<OperStatus, OpticsError> {
        let interfaces = self.lock_interfaces()?;
        let state = interfaces
            .get(interface)
            .ok_or_else(|| OpticsError::UnknownInterface(interface.to_string()))?;
        Ok(state.status_at(Instant::now(), self.settle_time))
    }
}

#[async_trait]
impl InterfaceConfigurator for SimulatedDut {
    async fn replace_interface(&self, config: &InterfaceConfig) -> Result<(), OpticsError> {
        let mut interfaces = self
            .interfaces
            .lock()
            .map_err(|_| OpticsError::Config(anyhow::anyhow!("simulated interface state is poisoned")))?;
        let state = interfaces
            .get_mut(&config.name)
            .ok_or_else(|| OpticsError::UnknownInterface(config.name.clone()))?;

        let now = Instant::now();
        if state.enabled == config.enabled {
            debug!("{} already has enabled={}", config.name, config.enabled);
            return Ok(());
        }

        state.previous = state.status_at(now, self.settle_time);
        state.enabled = config.enabled;
        state.changed_at = Some(now);
        info!("{} on {}: enabled={}", config.name, self.name, config.enabled);
        Ok(())
    }
}
