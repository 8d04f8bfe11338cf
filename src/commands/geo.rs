//! Geospatial commands.
//!
//! Distance units are emitted in the exact lowercase casing the server
//! expects: `m`, `km`, `ft`, `mi`.

use crate::builder::Builder;
use crate::flags::CommandFlags;

states! {
    Geoadd,
    GeoaddKey,
    GeoaddCondition,
    GeoaddChange,
    GeoaddMember,
    Geodist,
    GeodistKey,
    GeodistMember1,
    GeodistMember2,
    GeodistUnit,
    Geopos,
    GeoposKey,
    GeoposMember,
    Geosearch,
    GeosearchKey,
    GeosearchFrom,
    GeosearchByRadius,
    GeosearchByBox,
    GeosearchBy,
    GeosearchOrder,
    GeosearchCount,
    GeosearchCountAny,
    GeosearchWithcoord,
    GeosearchWithdist,
    GeosearchWithhash,
}

impl Builder {
    /// `GEOADD key [NX|XX] [CH] longitude latitude member ...`
    pub fn geoadd(self) -> Geoadd {
        Geoadd(self.cmd(CommandFlags::NONE, &["GEOADD"]))
    }

    /// `GEODIST key member1 member2 [m|km|ft|mi]`
    pub fn geodist(self) -> Geodist {
        Geodist(self.cmd(CommandFlags::READONLY, &["GEODIST"]))
    }

    /// `GEOPOS key [member ...]`
    pub fn geopos(self) -> Geopos {
        Geopos(self.cmd(CommandFlags::READONLY, &["GEOPOS"]))
    }

    /// `GEOSEARCH key <FROMMEMBER|FROMLONLAT> <BYRADIUS|BYBOX> ...`
    pub fn geosearch(self) -> Geosearch {
        Geosearch(self.cmd(CommandFlags::READONLY, &["GEOSEARCH"]))
    }
}

impl Geoadd {
    pub fn key(self, key: impl Into<String>) -> GeoaddKey {
        GeoaddKey(self.0.key(key))
    }
}

keyword! {
    GeoaddKey => nx ["NX"] -> GeoaddCondition;
    GeoaddKey => xx ["XX"] -> GeoaddCondition;
    GeoaddKey => ch ["CH"] -> GeoaddChange;
    GeoaddCondition => ch ["CH"] -> GeoaddChange;
}

macro_rules! geoadd_member {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn member(
                self,
                longitude: f64,
                latitude: f64,
                member: impl Into<String>,
            ) -> GeoaddMember {
                GeoaddMember(self.0.float(longitude).float(latitude).arg(member))
            }
        }
    )+};
}

geoadd_member! { GeoaddKey, GeoaddCondition, GeoaddChange, GeoaddMember }

impl Geodist {
    pub fn key(self, key: impl Into<String>) -> GeodistKey {
        GeodistKey(self.0.key(key))
    }
}

impl GeodistKey {
    pub fn member1(self, member: impl Into<String>) -> GeodistMember1 {
        GeodistMember1(self.0.arg(member))
    }
}

impl GeodistMember1 {
    pub fn member2(self, member: impl Into<String>) -> GeodistMember2 {
        GeodistMember2(self.0.arg(member))
    }
}

keyword! {
    GeodistMember2 => m ["m"] -> GeodistUnit;
    GeodistMember2 => km ["km"] -> GeodistUnit;
    GeodistMember2 => ft ["ft"] -> GeodistUnit;
    GeodistMember2 => mi ["mi"] -> GeodistUnit;
}

impl Geopos {
    pub fn key(self, key: impl Into<String>) -> GeoposKey {
        GeoposKey(self.0.key(key))
    }
}

impl GeoposKey {
    pub fn member<I, T>(self, members: I) -> GeoposMember
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        GeoposMember(self.0.args(members))
    }
}

impl GeoposMember {
    pub fn member<I, T>(self, members: I) -> GeoposMember
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        GeoposMember(self.0.args(members))
    }
}

impl Geosearch {
    pub fn key(self, key: impl Into<String>) -> GeosearchKey {
        GeosearchKey(self.0.key(key))
    }
}

impl GeosearchKey {
    pub fn frommember(self, member: impl Into<String>) -> GeosearchFrom {
        GeosearchFrom(self.0.arg("FROMMEMBER").arg(member))
    }

    pub fn fromlonlat(self, longitude: f64, latitude: f64) -> GeosearchFrom {
        GeosearchFrom(self.0.arg("FROMLONLAT").float(longitude).float(latitude))
    }
}

impl GeosearchFrom {
    pub fn byradius(self, radius: f64) -> GeosearchByRadius {
        GeosearchByRadius(self.0.arg("BYRADIUS").float(radius))
    }

    pub fn bybox(self, width: f64, height: f64) -> GeosearchByBox {
        GeosearchByBox(self.0.arg("BYBOX").float(width).float(height))
    }
}

keyword! {
    GeosearchByRadius => m ["m"] -> GeosearchBy;
    GeosearchByRadius => km ["km"] -> GeosearchBy;
    GeosearchByRadius => ft ["ft"] -> GeosearchBy;
    GeosearchByRadius => mi ["mi"] -> GeosearchBy;
    GeosearchByBox => m ["m"] -> GeosearchBy;
    GeosearchByBox => km ["km"] -> GeosearchBy;
    GeosearchByBox => ft ["ft"] -> GeosearchBy;
    GeosearchByBox => mi ["mi"] -> GeosearchBy;
    GeosearchBy => asc ["ASC"] -> GeosearchOrder;
    GeosearchBy => desc ["DESC"] -> GeosearchOrder;
}

macro_rules! geosearch_count {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn count(self, count: i64) -> GeosearchCount {
                GeosearchCount(self.0.arg("COUNT").int(count))
            }
        }
    )+};
}

geosearch_count! { GeosearchBy, GeosearchOrder }

keyword! {
    GeosearchCount => any ["ANY"] -> GeosearchCountAny;
}

macro_rules! geosearch_with {
    ($($state:ident),+) => {$(
        impl $state {
            pub fn withcoord(self) -> GeosearchWithcoord {
                GeosearchWithcoord(self.0.arg("WITHCOORD"))
            }

            pub fn withdist(self) -> GeosearchWithdist {
                GeosearchWithdist(self.0.arg("WITHDIST"))
            }
        }
    )+};
}

geosearch_with! { GeosearchBy, GeosearchOrder, GeosearchCount, GeosearchCountAny }

keyword! {
    GeosearchWithcoord => withdist ["WITHDIST"] -> GeosearchWithdist;
    GeosearchWithcoord => withhash ["WITHHASH"] -> GeosearchWithhash;
    GeosearchWithdist => withhash ["WITHHASH"] -> GeosearchWithhash;
}

build_terminal! {
    GeoaddMember,
    GeodistMember2,
    GeodistUnit,
    GeoposKey,
    GeoposMember,
    GeosearchBy,
    GeosearchOrder,
    GeosearchCount,
    GeosearchCountAny,
    GeosearchWithcoord,
    GeosearchWithdist,
    GeosearchWithhash,
}

cache_terminal! {
    GeodistMember2,
    GeodistUnit,
    GeoposKey,
    GeoposMember,
    GeosearchBy,
    GeosearchOrder,
    GeosearchCount,
    GeosearchCountAny,
    GeosearchWithcoord,
    GeosearchWithdist,
    GeosearchWithhash,
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, InitialSlot};

    fn root() -> Builder {
        Builder::new(InitialSlot::InitSlot)
    }

    #[test]
    fn geodist_unit_casing() {
        let cmd = root()
            .geodist()
            .key("points")
            .member1("a")
            .member2("b")
            .km()
            .build();
        assert_eq!(cmd.tokens(), &["GEODIST", "points", "a", "b", "km"]);
        assert!(cmd.flags().is_read_only());
    }

    #[test]
    fn geosearch_radius_chain() {
        let cmd = root()
            .geosearch()
            .key("points")
            .fromlonlat(15.0, 37.0)
            .byradius(200.0)
            .km()
            .asc()
            .count(10)
            .withcoord()
            .withdist()
            .build();
        assert_eq!(
            cmd.tokens(),
            &[
                "GEOSEARCH", "points", "FROMLONLAT", "15.0", "37.0",
                "BYRADIUS", "200.0", "km", "ASC", "COUNT", "10",
                "WITHCOORD", "WITHDIST"
            ]
        );
    }

    #[test]
    fn geoadd_repeats_members() {
        let cmd = root()
            .geoadd()
            .key("points")
            .nx()
            .member(13.361389, 38.115556, "Palermo")
            .member(15.087269, 37.502669, "Catania")
            .build();
        assert_eq!(cmd.tokens()[..3], ["GEOADD", "points", "NX"]);
        assert_eq!(cmd.tokens()[5], "Palermo");
        assert_eq!(cmd.tokens().len(), 9);
    }
}
