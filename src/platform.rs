//! Supported target platforms and their build profiles.
//!
//! The profile is a pure function of the platform: the same identifier
//! always resolves to the same flags, and an identifier outside the table
//! never gets past argument parsing.

use std::fmt;

use clap::ValueEnum;

/// Platforms the package can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    /// Ubuntu 20.04 LTS (focal)
    #[value(name = "20.04")]
    Ubuntu2004,
    /// Ubuntu 22.04 LTS (jammy)
    #[value(name = "22.04")]
    Ubuntu2204,
    /// Ubuntu 24.04 LTS (noble)
    #[value(name = "24.04")]
    Ubuntu2404,
}

/// Compiler and debuild settings for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildFlags {
    /// Extra compiler flags, exported as PLATFORM_BUILD_FLAGS.
    pub platform_flags: &'static str,
    /// Extra arguments for debuild itself, whitespace-separated.
    pub debuild_flags: &'static str,
    /// C compiler, exported as CC.
    pub c_compiler: &'static str,
    /// C++ compiler, exported as CXX.
    pub cxx_compiler: &'static str,
}

impl Platform {
    /// Resolve the build profile for this platform.
    ///
    /// 20.04 needs the vendor toolchain path and skips the build-deps
    /// check; 22.04's default clang emits DWARF 5, which the debug
    /// tooling there cannot read, so it stays on DWARF 4.
    pub const fn build_flags(self) -> BuildFlags {
        match self {
            Platform::Ubuntu2004 => BuildFlags {
                platform_flags: "",
                debuild_flags: "-d --prepend-path=/opt/vector/bin",
                c_compiler: "clang-10",
                cxx_compiler: "clang++-10",
            },
            Platform::Ubuntu2204 => BuildFlags {
                platform_flags: "-gdwarf-4",
                debuild_flags: "",
                c_compiler: "clang",
                cxx_compiler: "clang++",
            },
            Platform::Ubuntu2404 => BuildFlags {
                platform_flags: "",
                debuild_flags: "",
                c_compiler: "clang",
                cxx_compiler: "clang++",
            },
        }
    }

    /// The identifier as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ubuntu2004 => "20.04",
            Platform::Ubuntu2204 => "22.04",
            Platform::Ubuntu2404 => "24.04",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
