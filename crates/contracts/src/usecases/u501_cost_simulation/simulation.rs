//! Состояние симулятора себестоимости и его редьюсер
//!
//! Симуляция создаётся при открытии продукта, полностью пересобирается из
//! сохранённого рецепта и выбрасывается при закрытии, если рецепт не был
//! сохранён. Все изменения проходят через `CostSimulation::apply`.

use super::color_match::{color_matches, flowers_for_color};
use super::line_policy::LinePolicy;
use super::totals::SimulationTotals;
use crate::domain::a001_flower::{Flower, FlowerId};
use crate::domain::a002_container::{Container, ContainerId};
use crate::domain::a004_product::{
    Product, ProductColorId, ProductId, Recipe, RecipeColor, RecipeFlower,
};
use crate::shared::validation::{parse_amount, parse_quantity_lenient, sanitize_amount};
use std::collections::BTreeMap;

/// Локальный ID строки; на бэкенд не уходит
pub type LineId = u32;

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FlowerLine {
    pub line_id: LineId,
    pub flower_id: Option<FlowerId>,
    pub flower_name: String,
    pub quantity: u32,
    pub unit_cost: f64,
}

impl FlowerLine {
    pub fn cost(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }

    fn select(&mut self, flower: Option<&Flower>) {
        match flower {
            Some(f) => {
                self.flower_id = Some(f.id);
                self.flower_name = f.name.clone();
                self.unit_cost = sanitize_amount(f.unit_cost);
            }
            None => {
                self.flower_id = None;
                self.flower_name.clear();
                self.unit_cost = 0.0;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup {
    pub color_id: ProductColorId,
    pub color_name: String,
    pub lines: Vec<FlowerLine>,
}

impl ColorGroup {
    pub fn cost(&self) -> f64 {
        self.lines.iter().map(FlowerLine::cost).sum()
    }

    fn line_mut(&mut self, line_id: LineId) -> Option<&mut FlowerLine> {
        self.lines.iter_mut().find(|l| l.line_id == line_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSelection {
    pub container_id: ContainerId,
    pub name: String,
    pub unit_cost: f64,
}

/// Справочники, из которых берутся цены
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationCatalog {
    pub flowers: Vec<Flower>,
    pub containers: Vec<Container>,
}

impl SimulationCatalog {
    pub fn flower(&self, id: FlowerId) -> Option<&Flower> {
        self.flowers.iter().find(|f| f.id == id)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Изменение одной строки цветка
#[derive(Debug, Clone, PartialEq)]
pub enum LineChange {
    /// Выбран другой цветок (None - выбор сброшен)
    Flower(Option<FlowerId>),
    Quantity(u32),
}

impl LineChange {
    /// Значение из поля ввода количества: мусор и пустота дают 0
    pub fn quantity_from_input(raw: &str) -> Self {
        LineChange::Quantity(parse_quantity_lenient(raw))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationAction {
    AddLine {
        color_id: ProductColorId,
    },
    RemoveLine {
        color_id: ProductColorId,
        line_id: LineId,
    },
    UpdateLine {
        color_id: ProductColorId,
        line_id: LineId,
        change: LineChange,
    },
    SetContainer(Option<ContainerId>),
    SetSalePrice(f64),
    Reset,
}

impl SimulationAction {
    /// Цена продажи из поля ввода: мусор и отрицательные значения дают 0
    pub fn sale_price_from_input(raw: &str) -> Self {
        SimulationAction::SetSalePrice(sanitize_amount(
            parse_amount(raw, "Precio de venta").unwrap_or(0.0),
        ))
    }
}

// ============================================================================
// Simulation
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CostSimulation {
    product_id: ProductId,
    list_price: f64,
    groups: BTreeMap<ProductColorId, ColorGroup>,
    container: Option<ContainerSelection>,
    sale_price_override: Option<f64>,
    catalog: SimulationCatalog,
    /// Последний рецепт, полученный с сервера
    original: Recipe,
    /// Слоты цветов продукта; пустые группы строятся из них
    product_colors: Vec<(ProductColorId, String)>,
    policy: LinePolicy,
    next_line_id: LineId,
    dirty: bool,
}

impl CostSimulation {
    /// Построить симуляцию из сохранённого рецепта продукта
    pub fn from_recipe(
        product: &Product,
        recipe: Recipe,
        catalog: SimulationCatalog,
        policy: LinePolicy,
    ) -> Self {
        let mut sim = Self {
            product_id: product.id,
            list_price: sanitize_amount(product.price),
            groups: BTreeMap::new(),
            container: None,
            sale_price_override: None,
            catalog,
            original: recipe,
            product_colors: product
                .colors
                .iter()
                .map(|c| (c.id, c.name.clone()))
                .collect(),
            policy,
            next_line_id: 1,
            dirty: false,
        };
        sim.rebuild();
        sim
    }

    /// Заменить исходный рецепт (после сохранения) и пересобрать состояние
    pub fn replace_recipe(&mut self, recipe: Recipe) {
        self.original = recipe;
        self.rebuild();
    }

    /// Обновить справочники цен, не трогая правки пользователя
    pub fn replace_catalog(&mut self, catalog: SimulationCatalog) {
        self.catalog = catalog;
    }

    fn rebuild(&mut self) {
        self.groups.clear();
        self.next_line_id = 1;
        self.sale_price_override = None;
        self.dirty = false;

        let mut slots = self.product_colors.clone();
        for rc in &self.original.colors {
            if !slots.iter().any(|(id, _)| *id == rc.color_id) {
                slots.push((rc.color_id, rc.color_name.clone()));
            }
        }

        for (color_id, color_name) in slots {
            let stored: Vec<RecipeFlower> = self
                .original
                .color(color_id)
                .map(|c| c.flowers.clone())
                .unwrap_or_default();

            let mut group = ColorGroup {
                color_id,
                color_name,
                lines: Vec::new(),
            };

            if stored.is_empty() {
                for _ in 0..self.policy.initial_lines() {
                    let line = self.default_line(&group.color_name);
                    group.lines.push(line);
                }
            } else {
                for rf in stored {
                    let line = self.stored_line(&rf);
                    group.lines.push(line);
                }
            }

            self.groups.insert(color_id, group);
        }

        self.container = self
            .original
            .container_id
            .and_then(|id| self.container_selection(id));
    }

    fn take_line_id(&mut self) -> LineId {
        let id = self.next_line_id;
        self.next_line_id += 1;
        id
    }

    /// Строка по умолчанию: первый подходящий по цвету цветок, количество 1
    fn default_line(&mut self, color_name: &str) -> FlowerLine {
        let line_id = self.take_line_id();
        let mut line = FlowerLine {
            line_id,
            flower_id: None,
            flower_name: String::new(),
            quantity: 1,
            unit_cost: 0.0,
        };
        let first = flowers_for_color(&self.catalog.flowers, color_name)
            .into_iter()
            .next();
        line.select(first);
        line
    }

    /// Строка из сохранённого рецепта; цена берётся из справочника целиком,
    /// без фильтра по цвету
    fn stored_line(&mut self, rf: &RecipeFlower) -> FlowerLine {
        let line_id = self.take_line_id();
        match self.catalog.flower(rf.flower_id) {
            Some(f) => FlowerLine {
                line_id,
                flower_id: Some(f.id),
                flower_name: f.name.clone(),
                quantity: rf.quantity,
                unit_cost: sanitize_amount(f.unit_cost),
            },
            None => FlowerLine {
                line_id,
                flower_id: Some(rf.flower_id),
                flower_name: format!("Flor #{}", rf.flower_id),
                quantity: rf.quantity,
                unit_cost: 0.0,
            },
        }
    }

    fn container_selection(&self, id: ContainerId) -> Option<ContainerSelection> {
        self.catalog.container(id).map(|c| ContainerSelection {
            container_id: c.id,
            name: c.name.clone(),
            unit_cost: sanitize_amount(c.unit_cost),
        })
    }

    // ------------------------------------------------------------------------
    // Reducer
    // ------------------------------------------------------------------------

    /// Применить действие. Возвращает `false`, если состояние не изменилось
    /// (например, удаление последней строки запрещено политикой).
    pub fn apply(&mut self, action: SimulationAction) -> bool {
        let changed = match action {
            SimulationAction::AddLine { color_id } => self.add_line(color_id),
            SimulationAction::RemoveLine { color_id, line_id } => {
                self.remove_line(color_id, line_id)
            }
            SimulationAction::UpdateLine {
                color_id,
                line_id,
                change,
            } => self.update_line(color_id, line_id, change),
            SimulationAction::SetContainer(id) => self.set_container(id),
            SimulationAction::SetSalePrice(price) => {
                self.sale_price_override = Some(sanitize_amount(price));
                true
            }
            SimulationAction::Reset => {
                self.rebuild();
                return true;
            }
        };
        if changed {
            self.dirty = true;
        }
        changed
    }

    fn add_line(&mut self, color_id: ProductColorId) -> bool {
        let Some(color_name) = self.groups.get(&color_id).map(|g| g.color_name.clone()) else {
            return false;
        };
        let line = self.default_line(&color_name);
        if let Some(group) = self.groups.get_mut(&color_id) {
            group.lines.push(line);
        }
        true
    }

    fn remove_line(&mut self, color_id: ProductColorId, line_id: LineId) -> bool {
        let policy = self.policy;
        let Some(group) = self.groups.get_mut(&color_id) else {
            return false;
        };
        if !policy.can_remove(group.lines.len()) {
            return false;
        }
        let before = group.lines.len();
        group.lines.retain(|l| l.line_id != line_id);
        group.lines.len() != before
    }

    fn update_line(&mut self, color_id: ProductColorId, line_id: LineId, change: LineChange) -> bool {
        let Some(group) = self.groups.get_mut(&color_id) else {
            return false;
        };
        let color_name = group.color_name.clone();
        let Some(line) = group.line_mut(line_id) else {
            return false;
        };
        match change {
            LineChange::Flower(flower_id) => {
                let flower = flower_id.and_then(|id| {
                    self.catalog
                        .flowers
                        .iter()
                        .find(|f| f.id == id && color_matches(&color_name, &f.color))
                });
                line.select(flower);
            }
            LineChange::Quantity(quantity) => line.quantity = quantity,
        }
        true
    }

    fn set_container(&mut self, id: Option<ContainerId>) -> bool {
        self.container = id.and_then(|id| self.container_selection(id));
        true
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn list_price(&self) -> f64 {
        self.list_price
    }

    pub fn groups(&self) -> impl Iterator<Item = &ColorGroup> {
        self.groups.values()
    }

    pub fn group(&self, color_id: ProductColorId) -> Option<&ColorGroup> {
        self.groups.get(&color_id)
    }

    pub fn container(&self) -> Option<&ContainerSelection> {
        self.container.as_ref()
    }

    pub fn catalog(&self) -> &SimulationCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> LinePolicy {
        self.policy
    }

    pub fn original_recipe(&self) -> &Recipe {
        &self.original
    }

    /// Есть несохранённые правки
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn has_sale_price_override(&self) -> bool {
        self.sale_price_override.is_some()
    }

    /// Цена продажи: правка пользователя, затем сохранённая с рецептом, затем прайс
    pub fn sale_price(&self) -> f64 {
        self.sale_price_override
            .or(self.original.sale_price)
            .map(sanitize_amount)
            .unwrap_or(self.list_price)
    }

    /// Цветки, которые можно выбрать в группе
    pub fn available_flowers(&self, color_id: ProductColorId) -> Vec<&Flower> {
        match self.groups.get(&color_id) {
            Some(group) => flowers_for_color(&self.catalog.flowers, &group.color_name),
            None => Vec::new(),
        }
    }

    pub fn can_remove_line(&self, color_id: ProductColorId) -> bool {
        self.groups
            .get(&color_id)
            .map(|g| self.policy.can_remove(g.lines.len()))
            .unwrap_or(false)
    }

    pub fn compute_totals(&self) -> SimulationTotals {
        let flowers: f64 = self.groups.values().map(ColorGroup::cost).sum();
        let container = self.container.as_ref().map(|c| c.unit_cost).unwrap_or(0.0);
        SimulationTotals::new(flowers, container, self.sale_price())
    }

    // ------------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------------

    /// Рецепт для сохранения на бэкенде
    ///
    /// Строки без выбранного цветка пропускаются; `is_default` получает только
    /// первая сохраняемая строка каждой группы. Цена продажи уходит, только если
    /// отличается от прайсовой.
    pub fn to_recipe(&self) -> Recipe {
        let colors = self
            .groups
            .values()
            .map(|g| RecipeColor {
                color_id: g.color_id,
                color_name: g.color_name.clone(),
                flowers: g
                    .lines
                    .iter()
                    .filter_map(|l| l.flower_id.map(|id| (id, l.quantity)))
                    .enumerate()
                    .map(|(idx, (flower_id, quantity))| RecipeFlower {
                        flower_id,
                        quantity,
                        is_default: idx == 0,
                    })
                    .collect(),
            })
            .collect();

        let sale_price = self.sale_price();
        Recipe {
            product_id: self.product_id,
            colors,
            container_id: self.container.as_ref().map(|c| c.container_id),
            sale_price: if sale_price != self.list_price {
                Some(sale_price)
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_product::ProductColor;
    use proptest::prelude::*;

    const ROJO: ProductColorId = ProductColorId(1);
    const BLANCO: ProductColorId = ProductColorId(2);

    fn flower(id: i64, name: &str, color: &str, cost: f64) -> Flower {
        Flower {
            id: FlowerId(id),
            name: name.to_string(),
            color: color.to_string(),
            unit_cost: cost,
            stock: 100,
            min_stock: 0,
            supplier_id: None,
        }
    }

    fn catalog() -> SimulationCatalog {
        SimulationCatalog {
            flowers: vec![
                flower(10, "Rosa roja", "Rojo", 500.0),
                flower(11, "Clavel rojo", "rojo intenso", 300.0),
                flower(20, "Lilium blanco", "Blanco", 800.0),
            ],
            containers: vec![Container {
                id: ContainerId(5),
                name: "Florero vidrio".into(),
                kind: "Florero".into(),
                unit_cost: 3000.0,
                stock: 10,
            }],
        }
    }

    fn product(colors: &[(ProductColorId, &str)], price: f64) -> Product {
        Product {
            id: ProductId(1),
            name: "Ramo".into(),
            details: String::new(),
            price,
            category: String::new(),
            image_url: None,
            colors: colors
                .iter()
                .map(|(id, name)| ProductColor {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            active: true,
        }
    }

    fn recipe_color(id: ProductColorId, name: &str, flowers: &[(i64, u32)]) -> RecipeColor {
        RecipeColor {
            color_id: id,
            color_name: name.to_string(),
            flowers: flowers
                .iter()
                .enumerate()
                .map(|(i, (fid, q))| RecipeFlower {
                    flower_id: FlowerId(*fid),
                    quantity: *q,
                    is_default: i == 0,
                })
                .collect(),
        }
    }

    fn rojo_12_roses(container: Option<ContainerId>, price: f64) -> CostSimulation {
        let recipe = Recipe {
            product_id: ProductId(1),
            colors: vec![recipe_color(ROJO, "Rojo", &[(10, 12)])],
            container_id: container,
            sale_price: None,
        };
        CostSimulation::from_recipe(
            &product(&[(ROJO, "Rojo")], price),
            recipe,
            catalog(),
            LinePolicy::SIMULATOR,
        )
    }

    fn first_line(sim: &CostSimulation, color: ProductColorId) -> LineId {
        sim.group(color).unwrap().lines[0].line_id
    }

    #[test]
    fn test_scenario_single_group_no_container() {
        let sim = rojo_12_roses(None, 15000.0);
        assert_eq!(sim.compute_totals().total_cost, 6000.0);
    }

    #[test]
    fn test_scenario_with_container_and_margin() {
        let sim = rojo_12_roses(Some(ContainerId(5)), 15000.0);
        let t = sim.compute_totals();
        assert_eq!(t.total_container_cost, 3000.0);
        assert_eq!(t.total_cost, 9000.0);
        assert_eq!(t.margin, 6000.0);
        assert_eq!(t.margin_percent, 40.0);
    }

    #[test]
    fn test_scenario_two_groups() {
        let recipe = Recipe {
            product_id: ProductId(1),
            colors: vec![
                recipe_color(ROJO, "Rojo", &[(10, 12)]),
                recipe_color(BLANCO, "Blanco", &[(20, 6)]),
            ],
            container_id: None,
            sale_price: None,
        };
        let sim = CostSimulation::from_recipe(
            &product(&[(ROJO, "Rojo"), (BLANCO, "Blanco")], 20000.0),
            recipe,
            catalog(),
            LinePolicy::SIMULATOR,
        );
        assert_eq!(sim.compute_totals().total_flower_cost, 10800.0);
    }

    #[test]
    fn test_scenario_negative_margin() {
        let mut sim = rojo_12_roses(Some(ContainerId(5)), 15000.0);
        assert!(sim.apply(SimulationAction::SetSalePrice(5000.0)));
        let t = sim.compute_totals();
        assert_eq!(t.margin, -4000.0);
        assert_eq!(t.margin_percent, -80.0);
    }

    #[test]
    fn test_scenario_remove_only_line_keeps_group() {
        let mut sim = rojo_12_roses(None, 15000.0);
        let line = first_line(&sim, ROJO);
        assert!(sim.apply(SimulationAction::RemoveLine {
            color_id: ROJO,
            line_id: line
        }));
        let group = sim.group(ROJO).unwrap();
        assert!(group.lines.is_empty());
        assert_eq!(group.cost(), 0.0);
        assert_eq!(sim.compute_totals().total_cost, 0.0);
    }

    #[test]
    fn test_editor_policy_refuses_last_line_silently() {
        let recipe = Recipe {
            product_id: ProductId(1),
            colors: vec![recipe_color(ROJO, "Rojo", &[(10, 12)])],
            container_id: None,
            sale_price: None,
        };
        let mut sim = CostSimulation::from_recipe(
            &product(&[(ROJO, "Rojo")], 15000.0),
            recipe,
            catalog(),
            LinePolicy::RECIPE_EDITOR,
        );
        let line = first_line(&sim, ROJO);
        assert!(!sim.apply(SimulationAction::RemoveLine {
            color_id: ROJO,
            line_id: line
        }));
        assert_eq!(sim.group(ROJO).unwrap().lines.len(), 1);
        assert!(!sim.is_dirty());
    }

    #[test]
    fn test_empty_group_gets_default_line_under_editor_policy() {
        let sim = CostSimulation::from_recipe(
            &product(&[(BLANCO, "Blanco")], 0.0),
            Recipe::empty(ProductId(1)),
            catalog(),
            LinePolicy::RECIPE_EDITOR,
        );
        let line = &sim.group(BLANCO).unwrap().lines[0];
        assert_eq!(line.flower_id, Some(FlowerId(20)));
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_cost, 800.0);
    }

    #[test]
    fn test_add_line_defaults_to_first_matching_flower() {
        let mut sim = rojo_12_roses(None, 15000.0);
        assert!(sim.apply(SimulationAction::AddLine { color_id: ROJO }));
        let lines = &sim.group(ROJO).unwrap().lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].flower_id, Some(FlowerId(10)));
        assert_eq!(lines[1].quantity, 1);
        assert_ne!(lines[0].line_id, lines[1].line_id);
    }

    #[test]
    fn test_add_line_without_matching_flower() {
        let mut sim = CostSimulation::from_recipe(
            &product(&[(ProductColorId(9), "Azul")], 0.0),
            Recipe::empty(ProductId(1)),
            catalog(),
            LinePolicy::SIMULATOR,
        );
        assert!(sim.apply(SimulationAction::AddLine {
            color_id: ProductColorId(9)
        }));
        let line = &sim.group(ProductColorId(9)).unwrap().lines[0];
        assert_eq!(line.flower_id, None);
        assert_eq!(line.unit_cost, 0.0);
    }

    #[test]
    fn test_substitute_flower_keeps_quantity() {
        let mut sim = rojo_12_roses(None, 15000.0);
        let line = first_line(&sim, ROJO);
        sim.apply(SimulationAction::UpdateLine {
            color_id: ROJO,
            line_id: line,
            change: LineChange::Flower(Some(FlowerId(11))),
        });
        let l = &sim.group(ROJO).unwrap().lines[0];
        assert_eq!(l.quantity, 12);
        assert_eq!(l.unit_cost, 300.0);
        assert_eq!(l.flower_name, "Clavel rojo");
    }

    #[test]
    fn test_flower_outside_color_clears_selection() {
        let mut sim = rojo_12_roses(None, 15000.0);
        let line = first_line(&sim, ROJO);
        sim.apply(SimulationAction::UpdateLine {
            color_id: ROJO,
            line_id: line,
            change: LineChange::Flower(Some(FlowerId(20))),
        });
        let l = &sim.group(ROJO).unwrap().lines[0];
        assert_eq!(l.flower_id, None);
        assert_eq!(l.unit_cost, 0.0);
        assert_eq!(l.quantity, 12);
    }

    #[test]
    fn test_quantity_input_parsing() {
        let mut sim = rojo_12_roses(None, 15000.0);
        let line = first_line(&sim, ROJO);
        for raw in ["", "abc", "-4"] {
            sim.apply(SimulationAction::UpdateLine {
                color_id: ROJO,
                line_id: line,
                change: LineChange::quantity_from_input(raw),
            });
            assert_eq!(sim.group(ROJO).unwrap().lines[0].quantity, 0);
        }
    }

    #[test]
    fn test_sale_price_input_parsing() {
        let mut sim = rojo_12_roses(None, 15000.0);
        sim.apply(SimulationAction::sale_price_from_input("18000,5"));
        assert_eq!(sim.sale_price(), 18000.5);
        sim.apply(SimulationAction::sale_price_from_input("gratis"));
        assert_eq!(sim.sale_price(), 0.0);
        assert_eq!(sim.compute_totals().margin_percent, 0.0);
        sim.apply(SimulationAction::sale_price_from_input("-100"));
        assert_eq!(sim.sale_price(), 0.0);
    }

    #[test]
    fn test_set_container_and_clear() {
        let mut sim = rojo_12_roses(None, 15000.0);
        sim.apply(SimulationAction::SetContainer(Some(ContainerId(5))));
        assert_eq!(sim.compute_totals().total_container_cost, 3000.0);
        sim.apply(SimulationAction::SetContainer(None));
        assert!(sim.container().is_none());
        sim.apply(SimulationAction::SetContainer(Some(ContainerId(404))));
        assert!(sim.container().is_none());
    }

    #[test]
    fn test_reset_restores_recipe_and_price() {
        let mut sim = rojo_12_roses(Some(ContainerId(5)), 15000.0);
        let before = sim.compute_totals();

        sim.apply(SimulationAction::AddLine { color_id: ROJO });
        sim.apply(SimulationAction::SetContainer(None));
        sim.apply(SimulationAction::SetSalePrice(1.0));
        assert!(sim.is_dirty());
        assert_ne!(sim.compute_totals(), before);

        sim.apply(SimulationAction::Reset);
        assert_eq!(sim.compute_totals(), before);
        assert!(!sim.has_sale_price_override());
        assert!(!sim.is_dirty());
    }

    #[test]
    fn test_sale_price_prefers_stored_recipe_price() {
        let recipe = Recipe {
            sale_price: Some(18000.0),
            ..Recipe::empty(ProductId(1))
        };
        let sim = CostSimulation::from_recipe(
            &product(&[(ROJO, "Rojo")], 15000.0),
            recipe,
            catalog(),
            LinePolicy::SIMULATOR,
        );
        assert_eq!(sim.sale_price(), 18000.0);
    }

    #[test]
    fn test_to_recipe_marks_first_persisted_line_default() {
        let mut sim = rojo_12_roses(Some(ContainerId(5)), 15000.0);
        sim.apply(SimulationAction::AddLine { color_id: ROJO });
        let second = sim.group(ROJO).unwrap().lines[1].line_id;
        sim.apply(SimulationAction::UpdateLine {
            color_id: ROJO,
            line_id: second,
            change: LineChange::Flower(Some(FlowerId(11))),
        });
        sim.apply(SimulationAction::SetSalePrice(16000.0));

        let recipe = sim.to_recipe();
        let flowers = &recipe.colors[0].flowers;
        assert_eq!(flowers.len(), 2);
        assert!(flowers[0].is_default);
        assert!(!flowers[1].is_default);
        assert_eq!(recipe.container_id, Some(ContainerId(5)));
        assert_eq!(recipe.sale_price, Some(16000.0));
    }

    #[test]
    fn test_to_recipe_skips_lines_without_flower() {
        let mut sim = rojo_12_roses(None, 15000.0);
        let line = first_line(&sim, ROJO);
        sim.apply(SimulationAction::UpdateLine {
            color_id: ROJO,
            line_id: line,
            change: LineChange::Flower(None),
        });
        sim.apply(SimulationAction::AddLine { color_id: ROJO });

        let recipe = sim.to_recipe();
        let flowers = &recipe.colors[0].flowers;
        assert_eq!(flowers.len(), 1);
        assert!(flowers[0].is_default);
        assert_eq!(recipe.sale_price, None);
    }

    #[test]
    fn test_replace_recipe_after_save_round_trips() {
        let mut sim = rojo_12_roses(None, 15000.0);
        sim.apply(SimulationAction::AddLine { color_id: ROJO });
        let saved = sim.to_recipe();
        let totals = sim.compute_totals();

        sim.replace_recipe(saved);
        assert_eq!(sim.compute_totals(), totals);
        assert!(!sim.is_dirty());
    }

    #[test]
    fn test_unknown_stored_flower_costs_nothing() {
        let recipe = Recipe {
            product_id: ProductId(1),
            colors: vec![recipe_color(ROJO, "Rojo", &[(999, 3)])],
            container_id: None,
            sale_price: None,
        };
        let sim = CostSimulation::from_recipe(
            &product(&[(ROJO, "Rojo")], 0.0),
            recipe,
            catalog(),
            LinePolicy::SIMULATOR,
        );
        let line = &sim.group(ROJO).unwrap().lines[0];
        assert_eq!(line.flower_id, Some(FlowerId(999)));
        assert_eq!(line.quantity, 3);
        assert_eq!(sim.compute_totals().total_cost, 0.0);
    }

    fn catalog_with_costs(costs: &[u32]) -> SimulationCatalog {
        SimulationCatalog {
            flowers: costs
                .iter()
                .enumerate()
                .map(|(i, c)| flower(i as i64 + 1, "F", "Rojo", *c as f64))
                .collect(),
            containers: vec![],
        }
    }

    proptest! {
        #[test]
        fn prop_line_cost_is_quantity_times_cost(q in 0u32..10_000, c in 0u32..1_000_000) {
            let line = FlowerLine {
                line_id: 1,
                flower_id: None,
                flower_name: String::new(),
                quantity: q,
                unit_cost: c as f64,
            };
            prop_assert_eq!(line.cost(), q as f64 * c as f64);
        }

        #[test]
        fn prop_total_invariant_under_reordering(
            lines in proptest::collection::vec((0u32..500, 0u32..50_000), 1..8),
            split in 0usize..8,
        ) {
            let costs: Vec<u32> = lines.iter().map(|(_, c)| *c).collect();
            let cat = catalog_with_costs(&costs);
            let entries: Vec<(i64, u32)> = lines
                .iter()
                .enumerate()
                .map(|(i, (q, _))| (i as i64 + 1, *q))
                .collect();
            let split = split.min(entries.len());

            let build = |first: &[(i64, u32)], second: &[(i64, u32)], a: ProductColorId, b: ProductColorId| {
                let recipe = Recipe {
                    product_id: ProductId(1),
                    colors: vec![
                        recipe_color(a, "Rojo", first),
                        recipe_color(b, "Rojo", second),
                    ],
                    container_id: None,
                    sale_price: None,
                };
                CostSimulation::from_recipe(
                    &product(&[(a, "Rojo"), (b, "Rojo")], 0.0),
                    recipe,
                    cat.clone(),
                    LinePolicy::SIMULATOR,
                )
                .compute_totals()
                .total_cost
            };

            let forward = build(&entries[..split], &entries[split..], ROJO, BLANCO);
            let mut reversed_first: Vec<(i64, u32)> = entries[split..].to_vec();
            reversed_first.reverse();
            let mut reversed_second: Vec<(i64, u32)> = entries[..split].to_vec();
            reversed_second.reverse();
            let swapped = build(&reversed_first, &reversed_second, ROJO, BLANCO);

            prop_assert_eq!(forward, swapped);
        }

        #[test]
        fn prop_zero_sale_price_gives_zero_percent(q in 0u32..1000) {
            let mut sim = rojo_12_roses(None, 0.0);
            let line = first_line(&sim, ROJO);
            sim.apply(SimulationAction::UpdateLine {
                color_id: ROJO,
                line_id: line,
                change: LineChange::Quantity(q),
            });
            prop_assert_eq!(sim.compute_totals().margin_percent, 0.0);
        }
    }
}
