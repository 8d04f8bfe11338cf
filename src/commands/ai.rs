//! RedisAI tensor/model/script commands and the RedisGears entry point.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    AiTensorset,
    AiTensorsetKey,
    AiTensorsetType,
    AiTensorsetShape,
    AiTensorsetBlob,
    AiTensorsetValues,
    AiTensorget,
    AiTensorgetKey,
    AiTensorgetMeta,
    AiTensorgetFormat,
    AiModelexecute,
    AiModelexecuteKey,
    AiModelexecuteInputs,
    AiModelexecuteOutputs,
    AiModelexecuteTimeout,
    AiScriptstore,
    AiScriptstoreKey,
    AiScriptstoreDevice,
    AiScriptstoreTag,
    AiScriptstoreEntryPoints,
    AiScriptstoreSource,
    RgPyexecute,
    RgPyexecuteFunction,
    RgPyexecuteUnblocking,
    RgPyexecuteRequirements,
}

impl Builder {
    /// `AI.TENSORSET key type shape [shape ...] <BLOB blob | VALUES value ...>`
    pub fn ai_tensorset(self) -> AiTensorset {
        AiTensorset(self.cmd(CommandFlags::NONE, &["AI.TENSORSET"]))
    }

    /// `AI.TENSORGET key [META] <BLOB|VALUES>`
    pub fn ai_tensorget(self) -> AiTensorget {
        AiTensorget(self.cmd(CommandFlags::READONLY, &["AI.TENSORGET"]))
    }

    /// `AI.MODELEXECUTE key INPUTS n in... OUTPUTS n out... [TIMEOUT t]`
    pub fn ai_modelexecute(self) -> AiModelexecute {
        AiModelexecute(self.cmd(CommandFlags::NONE, &["AI.MODELEXECUTE"]))
    }

    /// `AI.SCRIPTSTORE key <CPU|GPU> [TAG tag] ENTRY_POINTS n p... SOURCE src`
    pub fn ai_scriptstore(self) -> AiScriptstore {
        AiScriptstore(self.cmd(CommandFlags::NONE, &["AI.SCRIPTSTORE"]))
    }

    /// `RG.PYEXECUTE function [UNBLOCKING] [REQUIREMENTS req ...]`
    pub fn rg_pyexecute(self) -> RgPyexecute {
        RgPyexecute(self.cmd(CommandFlags::NONE, &["RG.PYEXECUTE"]))
    }
}

impl AiTensorset {
    pub fn key(self, key: impl Into<String>) -> AiTensorsetKey {
        AiTensorsetKey(self.0.key(key))
    }
}

impl AiTensorsetKey {
    pub fn tensor_type(self, tensor_type: impl Into<String>) -> AiTensorsetType {
        AiTensorsetType(self.0.arg(tensor_type))
    }
}

impl AiTensorsetType {
    pub fn shape<I>(self, dims: I) -> AiTensorsetShape
    where
        I: IntoIterator<Item = i64>,
    {
        let mut state = self.0;
        for dim in dims {
            state = state.int(dim);
        }
        AiTensorsetShape(state)
    }
}

impl AiTensorsetShape {
    pub fn shape<I>(self, dims: I) -> AiTensorsetShape
    where
        I: IntoIterator<Item = i64>,
    {
        let mut state = self.0;
        for dim in dims {
            state = state.int(dim);
        }
        AiTensorsetShape(state)
    }

    pub fn blob(self, blob: impl Into<String>) -> AiTensorsetBlob {
        AiTensorsetBlob(self.0.arg("BLOB").arg(blob))
    }

    pub fn values<I, T>(self, values: I) -> AiTensorsetValues
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        AiTensorsetValues(self.0.arg("VALUES").args(values))
    }
}

impl AiTensorget {
    pub fn key(self, key: impl Into<String>) -> AiTensorgetKey {
        AiTensorgetKey(self.0.key(key))
    }
}

keyword! {
    AiTensorgetKey => meta ["META"] -> AiTensorgetMeta;
    AiTensorgetKey => blob ["BLOB"] -> AiTensorgetFormat;
    AiTensorgetKey => values ["VALUES"] -> AiTensorgetFormat;
    AiTensorgetMeta => blob ["BLOB"] -> AiTensorgetFormat;
    AiTensorgetMeta => values ["VALUES"] -> AiTensorgetFormat;
}

impl AiModelexecute {
    pub fn key(self, key: impl Into<String>) -> AiModelexecuteKey {
        AiModelexecuteKey(self.0.key(key))
    }
}

impl AiModelexecuteKey {
    /// `INPUTS input_count input [input ...]`
    pub fn inputs<I, K>(self, inputs: I) -> AiModelexecuteInputs
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();
        AiModelexecuteInputs(self.0.arg("INPUTS").int(inputs.len() as i64).keys(inputs))
    }
}

impl AiModelexecuteInputs {
    /// `OUTPUTS output_count output [output ...]`
    pub fn outputs<I, K>(self, outputs: I) -> AiModelexecuteOutputs
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let outputs: Vec<String> = outputs.into_iter().map(Into::into).collect();
        AiModelexecuteOutputs(self.0.arg("OUTPUTS").int(outputs.len() as i64).keys(outputs))
    }
}

impl AiModelexecuteOutputs {
    pub fn timeout(self, timeout: i64) -> AiModelexecuteTimeout {
        AiModelexecuteTimeout(self.0.arg("TIMEOUT").int(timeout))
    }
}

impl AiScriptstore {
    pub fn key(self, key: impl Into<String>) -> AiScriptstoreKey {
        AiScriptstoreKey(self.0.key(key))
    }
}

keyword! {
    AiScriptstoreKey => cpu ["CPU"] -> AiScriptstoreDevice;
    AiScriptstoreKey => gpu ["GPU"] -> AiScriptstoreDevice;
}

impl AiScriptstoreDevice {
    pub fn tag(self, tag: impl Into<String>) -> AiScriptstoreTag {
        AiScriptstoreTag(self.0.arg("TAG").arg(tag))
    }
}

macro_rules! ai_scriptstore_entry_points {
    ($($state:ident),+) => {$(
        impl $state {
            /// `ENTRY_POINTS n entry_point [entry_point ...]`
            pub fn entry_points<I, T>(self, points: I) -> AiScriptstoreEntryPoints
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                let points: Vec<String> = points.into_iter().map(Into::into).collect();
                AiScriptstoreEntryPoints(
                    self.0.arg("ENTRY_POINTS").int(points.len() as i64).args(points),
                )
            }
        }
    )+};
}

ai_scriptstore_entry_points! { AiScriptstoreDevice, AiScriptstoreTag }

impl AiScriptstoreEntryPoints {
    pub fn source(self, source: impl Into<String>) -> AiScriptstoreSource {
        AiScriptstoreSource(self.0.arg("SOURCE").arg(source))
    }
}

impl RgPyexecute {
    pub fn function(self, function: impl Into<String>) -> RgPyexecuteFunction {
        RgPyexecuteFunction(self.0.arg(function))
    }
}

keyword! {
    RgPyexecuteFunction => unblocking ["UNBLOCKING"] -> RgPyexecuteUnblocking;
}

macro_rules! rg_pyexecute_requirements {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn requirements<I, T>(self, requirements: I) -> RgPyexecuteRequirements
            where
                I: IntoIterator<Item = T>,
                T: Into<String>,
            {
                RgPyexecuteRequirements(self.0.arg("REQUIREMENTS").args(requirements))
            }
        }
    )+};
}

rg_pyexecute_requirements! { RgPyexecuteFunction, RgPyexecuteUnblocking }

impl RgPyexecuteRequirements {
    pub fn requirements<I, T>(self, requirements: I) -> RgPyexecuteRequirements
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        RgPyexecuteRequirements(self.0.args(requirements))
    }
}

build_terminal! {
    AiTensorsetBlob,
    AiTensorsetValues,
    AiTensorgetMeta,
    AiTensorgetFormat,
    AiModelexecuteOutputs,
    AiModelexecuteTimeout,
    AiScriptstoreSource,
    RgPyexecuteFunction,
    RgPyexecuteUnblocking,
    RgPyexecuteRequirements,
}

cache_terminal! {
    AiTensorgetMeta,
    AiTensorgetFormat,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    fn root() -> Builder {
        Builder::new(InitialSlot::InitSlot)
    }

    #[test]
    fn scriptstore_device_union() {
        let cmd = root()
            .ai_scriptstore()
            .key("script")
            .gpu()
            .entry_points(["run"])
            .source("def run(t): return t")
            .build();
        assert_eq!(
            cmd.tokens(),
            &[
                "AI.SCRIPTSTORE", "script", "GPU", "ENTRY_POINTS", "1", "run",
                "SOURCE", "def run(t): return t"
            ]
        );
    }

    #[test]
    fn modelexecute_counts_tensors() {
        let cmd = root()
            .ai_modelexecute()
            .key("{m}model")
            .inputs(["{m}in"])
            .outputs(["{m}out"])
            .timeout(500)
            .build();
        assert_eq!(
            cmd.tokens(),
            &[
                "AI.MODELEXECUTE", "{m}model", "INPUTS", "1", "{m}in",
                "OUTPUTS", "1", "{m}out", "TIMEOUT", "500"
            ]
        );
        assert_eq!(cmd.slot(), crate::slot::slot("m"));
    }

    #[test]
    fn tensorget_is_readonly() {
        let cmd = root().ai_tensorget().key("t").meta().values().build();
        assert_eq!(cmd.tokens(), &["AI.TENSORGET", "t", "META", "VALUES"]);
        assert!(cmd.flags().is_read_only());
    }

    #[test]
    fn pyexecute_requirements_loop() {
        let cmd = root()
            .rg_pyexecute()
            .function("GB().run()")
            .unblocking()
            .requirements(["numpy"])
            .requirements(["pandas"])
            .build();
        assert_eq!(
            cmd.tokens(),
            &["RG.PYEXECUTE", "GB().run()", "UNBLOCKING", "REQUIREMENTS", "numpy", "pandas"]
        );
    }
}
