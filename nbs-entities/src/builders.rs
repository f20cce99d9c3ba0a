pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{impact_builder::*, solution_builder::*};

pub mod solution_builder {

    use super::*;
    use crate::{
        geometry::*, impact::*, physical_properties::*, solution::*, styling::*,
    };

    #[derive(Debug)]
    pub struct SolutionBuild {
        solution: Solution,
    }

    impl SolutionBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.solution.id = id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.solution.name = name.into();
            self
        }
        pub fn definition(mut self, definition: &str) -> Self {
            self.solution.definition = definition.into();
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.solution.location = location.into();
            self
        }
        pub fn point(mut self, lon: f64, lat: f64) -> Self {
            self.solution.geometry = Some(Geometry::Point(Position::new(lon, lat)));
            self
        }
        pub fn geometry(mut self, geometry: Option<Geometry>) -> Self {
            self.solution.geometry = geometry;
            self
        }
        pub fn styling(mut self, color: &str, hidden: bool) -> Self {
            self.solution.styling = Some(Styling {
                color: color.into(),
                hidden,
            });
            self
        }
        pub fn physical_properties(mut self, props: PhysicalProperties) -> Self {
            self.solution.physical_properties = Some(props);
            self
        }
        pub fn measure_id(mut self, id: &str) -> Self {
            self.solution.measure_id = Some(id.into());
            self
        }
        pub fn impact(mut self, impact: Impact) -> Self {
            self.solution.impacts.push(impact);
            self
        }
        pub fn finish(self) -> Solution {
            self.solution
        }
    }

    impl Builder for Solution {
        type Build = SolutionBuild;
        fn build() -> Self::Build {
            SolutionBuild {
                solution: Solution {
                    id: 0,
                    name: Default::default(),
                    definition: Default::default(),
                    cobenefits: Default::default(),
                    specificdetails: Default::default(),
                    location: Default::default(),
                    geometry: None,
                    styling: None,
                    physical_properties: None,
                    area: None,
                    length: None,
                    measure_id: None,
                    impacts: vec![],
                    adaptations: vec![],
                },
            }
        }
    }
}

pub mod impact_builder {

    use super::*;
    use crate::impact::*;

    #[derive(Debug)]
    pub struct ImpactBuild {
        impact: Impact,
    }

    impl ImpactBuild {
        pub fn magnitude(mut self, magnitude: f64) -> Self {
            self.impact.magnitude = magnitude;
            self
        }
        pub fn unit(mut self, unit: &str, description: &str) -> Self {
            self.impact.unit = ImpactUnit {
                unit: unit.into(),
                description: description.into(),
            };
            self
        }
        pub fn intensity(mut self, intensity: &str) -> Self {
            self.impact.intensity = ImpactIntensity::new(intensity);
            self
        }
        pub fn climate(mut self, climate: ClimateImpact) -> Self {
            self.specialized().climate = Some(climate);
            self
        }
        pub fn water_quality(mut self, water_quality: WaterQualityImpact) -> Self {
            self.specialized().water_quality = Some(water_quality);
            self
        }
        pub fn cost(mut self, cost: CostImpact) -> Self {
            self.specialized().cost = Some(cost);
            self
        }
        fn specialized(&mut self) -> &mut SpecializedImpacts {
            self.impact.specialized.get_or_insert_with(Default::default)
        }
        pub fn finish(self) -> Impact {
            self.impact
        }
    }

    impl Builder for Impact {
        type Build = ImpactBuild;
        fn build() -> Self::Build {
            ImpactBuild {
                impact: Impact {
                    magnitude: 0.0,
                    unit: ImpactUnit {
                        unit: Default::default(),
                        description: Default::default(),
                    },
                    intensity: ImpactIntensity::new("medium"),
                    specialized: None,
                },
            }
        }
    }
}
